//! 벤더 클라이언트 구현 모듈
//!
//! 실제 플랫폼 SDK 바인딩은 이 워크스페이스 밖에 있습니다. 여기에는
//! 개발/테스트용 인프로세스 구현만 있습니다.

pub mod stub;

#[cfg(test)]
pub(crate) mod mock;

pub use stub::{StubClientFactory, StubGameServices};
