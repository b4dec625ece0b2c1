// Rust guideline compliant 2026-10-18

//! Error types for the Folio core library.

use std::fmt;
use thiserror::Error;

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Folio operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded or is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Kind of record a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The site owner's profile.
    Profile,
    /// An entry in the achievements list.
    Achievement,
    /// An entry in the content list.
    ContentItem,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Profile => "profile",
            RecordKind::Achievement => "achievement",
            RecordKind::ContentItem => "content item",
        };
        f.write_str(name)
    }
}

/// A record was rejected before it reached the store.
///
/// Raised by the store's bulk setters. The store is left untouched when
/// this error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {record}{}: {message}", .index.map(|i| format!(" at index {i}")).unwrap_or_default())]
pub struct ValidationError {
    record: RecordKind,
    index: Option<usize>,
    message: String,
}

impl ValidationError {
    /// Creates a validation error for a single record.
    pub fn new(record: RecordKind, message: impl Into<String>) -> Self {
        Self {
            record,
            index: None,
            message: message.into(),
        }
    }

    /// Attaches the position of the offending element within its list.
    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Returns the kind of record that failed.
    pub fn record(&self) -> RecordKind {
        self.record
    }

    /// Returns the list index of the failing element, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the human-readable reason.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure reported by a key-value storage backend.
///
/// These never reach callers of the store; they are logged and the
/// in-memory state stays authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend refused a write because it is full.
    #[error("Quota exceeded writing '{key}': {size} bytes over a limit of {limit}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Total bytes the write would have required.
        size: usize,
        /// Configured capacity in bytes.
        limit: usize,
    },

    /// The backend is disabled or otherwise unusable.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure in a file-backed store.
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage lock could not be acquired.
    #[error("Failed to acquire storage lock: {0}")]
    Lock(String),
}
