//! PlayLink Library Module
//!
//! Exposes the session layer for the game code and the test harness

pub mod client;
pub mod error;
pub mod service;

// Re-export commonly used types
pub use client::{StubClientFactory, StubGameServices};
pub use error::{PlayLinkError, PlayLinkResult};
pub use service::SessionService;
