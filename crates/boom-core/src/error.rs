// crates/boom-core/src/error.rs - Error taxonomy for store resolution and persistence
//
// Every failure in the core surfaces as a BoomError and travels up to the
// invocation boundary untouched. The CLI wraps it with anyhow context and
// exits non-zero. Nothing here is swallowed: the only silent outcomes are the
// idempotent no-ops (creating a list that exists, deleting something absent),
// and those are not errors at all.
//
// KNOWN RACE:
// Two processes running against the same JSON file are last-save-wins. There
// is no locking and no optimistic check, so a concurrent save can discard the
// other process's mutation without producing any of these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving and applying a command
#[derive(Error, Debug)]
pub enum BoomError {
    #[error("Unknown list {0}")]
    UnknownList(String),

    #[error("Unknown key {key} in list {list}")]
    UnknownKey { list: String, key: String },

    #[error("Couldn't find key: {0}")]
    KeyNotFound(String),

    /// The persisted store exists but could not be read or parsed.
    ///
    /// Raised by `fetch`, so it always aborts the invocation before any
    /// mutation is attempted.
    #[error("Failed to read store at {path}: {source}")]
    PersistenceRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Saving failed. The in-memory store changed for this invocation, but
    /// the mutation did not durably happen.
    #[error("Failed to write store at {path}: {source}")]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode store: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A side channel (clipboard, browser, editor, prompt) failed
    #[error("{0}")]
    Effect(String),

    #[error("Not supported: {0}")]
    Unsupported(String),

    /// The resolution chain is total, so reaching this means a resolver bug
    #[error("Ambiguous command: {0}")]
    AmbiguousCommand(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, BoomError>;

impl BoomError {
    /// Wrap any displayable side-channel failure
    pub fn effect(message: impl Into<String>) -> Self {
        Self::Effect(message.into())
    }

    /// Whether this error came from a lookup miss rather than from I/O
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::UnknownList(_) | Self::UnknownKey { .. } | Self::KeyNotFound(_)
        )
    }
}
