//! Error types for the shape command relay.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A queue entry was not present at read/remove time. Expected under
    /// concurrent consumption and always recoverable.
    #[error("Command entry not found: {id}")]
    EntryNotFound { id: String },

    /// The backing store directory could not be created or listed.
    #[error("Command store unavailable at {path}: {source}")]
    StoreUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A persisted entry exists but its body failed to deserialize.
    #[error("Malformed command entry {id}: {source}")]
    MalformedEntry {
        id: String,
        source: serde_json::Error,
    },

    /// The external construction collaborator rejected a command.
    #[error("Construction handler failed for {shape} command {id}: {message}")]
    Construction {
        id: String,
        shape: String,
        message: String,
    },

    /// The upstream text generator failed to produce output.
    #[error("Text generation failed: {message}")]
    Generation { message: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// Whether this error means the requested entry simply isn't there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RelayError::EntryNotFound { .. })
    }
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
