//! PlayLink Shared Library
//!
//! 세션 계층과 테스트 하네스가 같이 쓰는 공통 모듈입니다.
//! - `config`: 플랫폼 설정 로드
//! - `logging`: tracing 초기화
//! - `model`: 벤더 데이터 모델과 상태 코드
//! - `tool`: 시간/에러 유틸리티
//! - `traits`: 의존성 주입용 벤더 클라이언트 트레이트

pub mod config;
pub mod logging;
pub mod model;
pub mod tool;
pub mod traits;

// Re-export commonly used types
pub use config::PlatformConfig;
pub use model::{
    AuthEvent, AuthOperation, AuthStatus, ResponseStatus, SnapshotConflictPolicy,
    SnapshotMetadata, SnapshotMetadataChange, UiStatus,
};
pub use tool::error::{AppError, ErrorSeverity};
pub use traits::{ClientBuildSettings, ClientFactory, GameServicesClient};
