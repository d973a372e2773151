//! Error types for transformation operations.

use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur while reading snapshots or submitting commands.
///
/// Failed edit preconditions are not errors; they surface as
/// [`Dispatch::Skipped`](crate::Dispatch::Skipped).
#[derive(Debug, Error)]
pub enum TransformError {
    /// Snapshot or command serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while loading a snapshot.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A user-entered value could not be turned into a number.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The command sink refused a command.
    #[error("Command rejected by sink: {0}")]
    Sink(String),

    /// The snapshot source could not produce a snapshot.
    #[error("Snapshot unavailable: {0}")]
    SnapshotUnavailable(String),
}
