//! 통합 로깅 시스템
//!
//! 게임 클라이언트 세션 계층을 위한 로깅 초기화입니다.
//! 파일 순환/전송은 플랫폼 로깅이 담당하므로 여기서는 tracing 구독자만 설정합니다.
//!
//! # 사용 예시
//! ```rust
//! use shared::logging::{init_logging, ServiceType};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(ServiceType::PlayLink)?;
//!     tracing::info!("세션 계층 시작");
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// 서비스 타입 열거형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// 게임 서비스 세션 계층
    PlayLink,
    /// 공유 라이브러리
    Shared,
}

impl ServiceType {
    /// 서비스 타입을 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::PlayLink => "playlink",
            ServiceType::Shared => "shared",
        }
    }
}

/// 로깅 시스템 초기화 함수
///
/// RUST_LOG가 설정되어 있으면 그쪽을 따르고, 없으면 해당 서비스만
/// debug 레벨로 올린 기본 필터를 사용합니다.
pub fn init_logging(service_type: ServiceType) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{}=debug", service_type.as_str())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    Ok(())
}
