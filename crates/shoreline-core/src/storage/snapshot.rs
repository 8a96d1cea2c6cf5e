//! JSON snapshot persistence.
//!
//! The whole application state -- settings plus every entry -- lives in one
//! JSON file and is rewritten in full after every mutation. There is no
//! incremental persistence and no other on-disk format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::entry::WeightEntry;
use crate::error::StorageError;
use crate::settings::Settings;

/// The single persisted document: `{ settings, entries }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub entries: Vec<WeightEntry>,
}

/// Reads and writes the snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store backed by `snapshot.json` in the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: super::data_dir()?.join("snapshot.json"),
        })
    }

    /// Store backed by an explicit file path (tests, alternate locations).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot. A missing file yields the default empty snapshot;
    /// a file that exists but does not parse is a `Corrupt` error.
    pub fn load(&self) -> Result<Snapshot, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Snapshot::default())
            }
            Err(e) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Load the snapshot, falling back to the default empty snapshot on any
    /// failure. Parse failures never propagate through this path.
    pub fn load_or_default(&self) -> Snapshot {
        self.load().unwrap_or_default()
    }

    /// Write the full snapshot.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(snapshot).map_err(StorageError::Serialize)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Remove the snapshot file (full reset). Missing file is not an error.
    pub fn wipe(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
