//! 세션 계층 에러 타입 확장
//!
//! shared::tool::error::AppError를 확장하여 세션 계층 특화 에러 타입을 제공합니다.

use shared::tool::error::AppError;
use thiserror::Error;

/// 세션 계층 특화 에러 타입
#[derive(Debug, Error)]
pub enum PlayLinkError {
    #[error("Client not initialized")]
    NotInitialized,

    #[error("Client construction failed: {0}")]
    ClientBuildError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// AppError로 변환
impl From<PlayLinkError> for AppError {
    fn from(err: PlayLinkError) -> Self {
        match err {
            PlayLinkError::NotInitialized => {
                AppError::ServiceUnavailable("client not initialized".to_string())
            }
            PlayLinkError::ClientBuildError(msg) => {
                AppError::ExternalServiceError(format!("client build: {}", msg))
            }
            PlayLinkError::ConfigError(msg) => AppError::Configuration(msg),
        }
    }
}

// 편의를 위한 타입 별칭
pub type PlayLinkResult<T> = Result<T, PlayLinkError>;
