pub mod snapshot;

pub use snapshot::{Snapshot, SnapshotStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Directory holding the snapshot file, created on first use.
///
/// Resolves to `~/.config/shoreline/`, or `~/.config/shoreline-dev/` when
/// `SHORELINE_ENV=dev`, so development runs never touch real data.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SHORELINE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("shoreline-dev")
    } else {
        base_dir.join("shoreline")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
