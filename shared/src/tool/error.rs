//! 공통 에러 관리 시스템
//!
//! 게임 서비스 세션 계층의 로컬 에러를 체계적으로 관리합니다.
//! 벤더 상태 코드는 여기 들어오지 않습니다 — 그것들은 model::status의
//! 열거형으로 분류되어 로그로만 남습니다.

use thiserror::Error;
use tracing::{error, info, warn};

/// 공통 애플리케이션 에러 정의
///
/// 벤더 호출 이전, 로컬에서 발생할 수 있는 에러만 정의합니다.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    // 인증 관련 에러
    #[error("인증 실패: {0}")]
    AuthError(String),

    #[error("권한 없음: {0}")]
    PermissionDenied(String),

    // 입력값 검증 에러
    #[error("입력값 오류: {0}")]
    InvalidInput(String),

    #[error("잘못된 형식: {0}")]
    InvalidFormat(String),

    // 외부 서비스 에러
    #[error("외부 서비스 호출 실패: {0}")]
    ExternalServiceError(String),

    // 시스템 에러
    #[error("내부 에러: {0}")]
    InternalError(String),

    #[error("서비스 일시적 사용 불가: {0}")]
    ServiceUnavailable(String),

    #[error("타임아웃: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// 에러의 심각도를 반환합니다.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Critical: 세션 계층 자체가 동작 불가
            AppError::ServiceUnavailable(_) | AppError::Configuration(_) => {
                ErrorSeverity::Critical
            }

            // High: 벤더 연동 실패
            AppError::AuthError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_)
            | AppError::Timeout(_) => ErrorSeverity::High,

            // Medium: 호출 측 입력 오류
            AppError::InvalidInput(_) | AppError::InvalidFormat(_) => ErrorSeverity::Medium,

            // Low: 일반적인 경고
            AppError::PermissionDenied(_) => ErrorSeverity::Low,
        }
    }

    /// 에러를 로깅합니다.
    ///
    /// 심각도에 따라 적절한 로깅 레벨을 사용합니다.
    pub fn log(&self, context: &str) {
        let severity = self.severity();
        let error_msg = self.to_string();

        match severity {
            ErrorSeverity::Critical => {
                error!("[CRITICAL] {} - {}", context, error_msg);
            }
            ErrorSeverity::High => {
                error!("[HIGH] {} - {}", context, error_msg);
            }
            ErrorSeverity::Medium => {
                warn!("[MEDIUM] {} - {}", context, error_msg);
            }
            ErrorSeverity::Low => {
                info!("[LOW] {} - {}", context, error_msg);
            }
        }
    }
}

/// 에러 심각도 레벨
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorSeverity {
    Critical, // 세션 계층 장애
    High,     // 벤더 연동 실패
    Medium,   // 호출 측 입력 오류
    Low,      // 일반적인 경고
}
