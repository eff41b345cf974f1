use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

// 기본값 상수
const DEFAULT_CLIENT_ID: &str = "playlink_client_id";
const DEFAULT_PACKAGE_NAME: &str = "com.yourcompany.playlink";

/// 게임 서비스 플랫폼 설정
///
/// 벤더 클라이언트 생성 시 그대로 전달되는 값들입니다.
/// .env 또는 환경변수에서 읽고, 없으면 기본값을 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// 게임 서비스 콘솔에 등록된 OAuth 클라이언트 ID
    pub client_id: String,
    /// 앱 패키지 이름
    pub package_name: String,
}

impl PlatformConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Self {
        // .env 파일 로드 (현재 디렉토리와 상위 디렉토리에서 찾기)
        let env_paths = vec![".env", "../.env", "../../.env"];
        let mut env_loaded = false;

        for path in env_paths {
            if std::path::Path::new(path).exists() {
                dotenv::from_filename(path).ok();
                env_loaded = true;
                break;
            }
        }

        if !env_loaded {
            dotenv().ok(); // 기본 .env 파일 시도
        }

        let client_id = env::var("GAME_SERVICES_CLIENT_ID")
            .unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string());
        let package_name = env::var("GAME_SERVICES_PACKAGE_NAME")
            .unwrap_or_else(|_| DEFAULT_PACKAGE_NAME.to_string());

        Self {
            client_id,
            package_name,
        }
    }

    /// 설정 유효성 검증
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.client_id.trim().is_empty() {
            anyhow::bail!("client_id가 비어 있습니다");
        }
        if self.package_name.trim().is_empty() {
            anyhow::bail!("package_name이 비어 있습니다");
        }
        Ok(())
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
        }
    }
}
