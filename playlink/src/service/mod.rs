//! 서비스 계층 모듈
//!
//! 세션 수명주기와 스냅샷 워크플로를 담당합니다.

pub mod session_service;
mod snapshot;

pub use session_service::SessionService;
