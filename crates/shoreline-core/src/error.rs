//! Core error types for shoreline-core.
//!
//! Errors form a small hierarchy built with thiserror: validation failures
//! surfaced at the input boundary, not-found conditions from entry lookups,
//! and storage failures from the snapshot file.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for shoreline-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entry lookup failed
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Validation errors raised before any state change.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Weight was absent, zero, or negative
    #[error("weight missing: expected a positive weight, got {got}")]
    MissingWeight { got: f64 },

    /// Target weight was absent, zero, or negative
    #[error("target weight missing: expected a positive target weight, got {got}")]
    MissingTargetWeight { got: f64 },

    /// First-run setup was attempted twice
    #[error("setup already complete; use reset to start over")]
    SetupAlreadyComplete,

    /// Setup has not run yet
    #[error("setup not complete; run setup first")]
    SetupNotComplete,
}

/// An edit or delete referenced an entry id absent from the journal.
#[derive(Error, Debug)]
#[error("no entry with id {id}")]
pub struct NotFoundError {
    pub id: Uuid,
}

/// Snapshot persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Snapshot file could not be read or written
    #[error("Failed to access snapshot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file exists but does not parse
    #[error("Corrupt snapshot at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot could not be serialized
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Data directory could not be determined or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
