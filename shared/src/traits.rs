//! Common trait definitions for dependency injection
//!
//! The vendor game-services client is defined as a trait to enable:
//! - Dependency injection
//! - Easy testing with mock implementations
//! - Running against the in-process stub without real platform services

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::platform_config::PlatformConfig;
use crate::model::{
    AuthEvent, CommitResponse, LogVerbosity, OpenResponse, ReadResponse, SnapshotConflictPolicy,
    SnapshotMetadata, SnapshotMetadataChange, SnapshotSelectUiResponse, UiStatus,
};

// ============================================================================
// GAME SERVICES CLIENT TRAIT
// ============================================================================

/// Vendor game-services client capability surface
///
/// Auth outcomes are not returned from the initiating calls; they arrive
/// asynchronously as [`AuthEvent`]s on the channel registered at build time.
#[async_trait]
pub trait GameServicesClient: Send + Sync {
    /// Whether the current user has completed sign-in
    fn is_authorized(&self) -> bool;

    /// Kick off the vendor sign-in UI/network flow
    async fn start_authorization_ui(&self);

    /// Tear down the current authorization
    async fn sign_out(&self);

    /// Fire-and-forget achievement unlock
    fn unlock_achievement(&self, achievement_id: &str);

    /// Fire-and-forget leaderboard score submit
    fn submit_score(&self, leaderboard_id: &str, score: u64);

    /// Present the all-achievements UI; resolves when dismissed
    async fn show_achievements_ui(&self) -> UiStatus;

    /// Present a single leaderboard UI; resolves when dismissed
    async fn show_leaderboard_ui(&self, leaderboard_id: &str) -> UiStatus;

    // ------------------------------------------------------------------
    // Snapshot subsystem
    // ------------------------------------------------------------------

    /// Open (create-or-reuse) a named snapshot slot
    async fn open_snapshot(
        &self,
        file_name: &str,
        policy: SnapshotConflictPolicy,
    ) -> OpenResponse;

    /// Read the payload of an opened slot
    async fn read_snapshot(&self, metadata: &SnapshotMetadata) -> ReadResponse;

    /// Commit new payload bytes plus a metadata change-set to an opened slot
    async fn commit_snapshot(
        &self,
        metadata: &SnapshotMetadata,
        change: SnapshotMetadataChange,
        payload: Bytes,
    ) -> CommitResponse;

    /// Present the snapshot selection UI
    async fn show_snapshot_select_ui(
        &self,
        allow_create: bool,
        allow_delete: bool,
        max_snapshots: u32,
        title: &str,
    ) -> SnapshotSelectUiResponse;
}

// ============================================================================
// CLIENT FACTORY TRAIT
// ============================================================================

/// Hooks and capability flags registered when the client is built
pub struct ClientBuildSettings {
    /// Channel the client delivers auth progress events on
    pub auth_events: UnboundedSender<AuthEvent>,
    /// Default log sink level for the vendor SDK internals
    pub log_verbosity: LogVerbosity,
    /// Capability flag: cloud-save snapshots enabled
    pub enable_snapshots: bool,
}

/// Factory producing a vendor client from platform configuration
///
/// The session service calls this exactly once; repeated initialization is
/// rejected before the factory is reached.
pub trait ClientFactory: Send + Sync {
    fn create(
        &self,
        config: &PlatformConfig,
        settings: ClientBuildSettings,
    ) -> Result<Arc<dyn GameServicesClient>>;
}
