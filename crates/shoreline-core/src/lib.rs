//! # Shoreline Core Library
//!
//! Core business logic for Shoreline, a personal weight-tracking journal.
//! The library is CLI-first: every operation is available through the
//! standalone `shoreline` binary, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Journal**: date-keyed entry store; every mutation re-runs a full
//!   recalculation pass so derived fields stay consistent
//! - **Projection**: trailing-window trend extrapolation toward the target
//!   weight, with full-history fallback
//! - **Reports**: progress summary, history rows, and chart series consumed
//!   by the presentation layer
//! - **Storage**: single JSON snapshot rewritten in full after every mutation
//!
//! ## Key Components
//!
//! - [`Tracker`]: application facade routing mutation through
//!   mutate-then-persist
//! - [`Journal`]: ordered entry store
//! - [`ProjectionEngine`]: goal-date extrapolation
//! - [`SnapshotStore`]: snapshot persistence

pub mod entry;
pub mod error;
pub mod journal;
pub mod projection;
pub mod report;
pub mod settings;
pub mod storage;
pub mod tracker;

pub use entry::{classify, ChangeType, WeightEntry};
pub use error::{CoreError, NotFoundError, Result, StorageError, ValidationError};
pub use journal::Journal;
pub use projection::{Projection, ProjectionEngine};
pub use report::{ChartSeries, HistoryRow, ProgressSummary};
pub use settings::{Settings, Unit};
pub use storage::{Snapshot, SnapshotStore};
pub use tracker::{LogOutcome, Tracker};
