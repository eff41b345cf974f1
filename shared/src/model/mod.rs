pub mod snapshot_model;
pub mod status;

// Re-export commonly used types
pub use snapshot_model::{
    CommitResponse, OpenResponse, ReadResponse, SnapshotMetadata, SnapshotMetadataChange,
    SnapshotSelectUiResponse,
};
pub use status::{
    AuthEvent, AuthOperation, AuthStatus, LogVerbosity, ResponseStatus, SnapshotConflictPolicy,
    UiStatus,
};
