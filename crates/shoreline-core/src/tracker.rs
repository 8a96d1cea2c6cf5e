//! Tracker facade: settings + journal + snapshot store.
//!
//! Every mutating operation goes mutate-then-persist, so the snapshot on
//! disk always reflects the last completed operation and persistence
//! failures surface to the caller instead of being dropped. Validation of
//! user input happens here, at the form boundary; the journal itself stays
//! permissive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result, ValidationError};
use crate::journal::Journal;
use crate::projection::{Projection, ProjectionEngine};
use crate::report::{ChartSeries, HistoryRow, ProgressSummary};
use crate::settings::{Settings, Unit};
use crate::storage::{Snapshot, SnapshotStore};

/// Result of logging a weight, used by the caller to pick between the
/// goal-achieved and keep-going flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogOutcome {
    pub entry_id: Uuid,
    /// Logged weight is at or below the target.
    pub goal_achieved: bool,
    pub projection: Projection,
}

/// The application core: owns the state and routes all mutation.
#[derive(Debug)]
pub struct Tracker {
    settings: Settings,
    journal: Journal,
    store: SnapshotStore,
    engine: ProjectionEngine,
}

impl Tracker {
    /// Open the tracker against the default data directory, recovering to
    /// the empty pre-setup state if the snapshot is missing or corrupt.
    pub fn open() -> Result<Self> {
        Ok(Self::load_or_default(SnapshotStore::open()?))
    }

    /// Build a tracker from an explicit store, tolerating a bad snapshot.
    pub fn load_or_default(store: SnapshotStore) -> Self {
        let snapshot = store.load_or_default();
        Self::from_snapshot(snapshot, store)
    }

    fn from_snapshot(snapshot: Snapshot, store: SnapshotStore) -> Self {
        Self {
            settings: snapshot.settings,
            journal: Journal::from_entries(snapshot.entries),
            store,
            engine: ProjectionEngine::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn is_set_up(&self) -> bool {
        self.settings.setup_complete
    }

    /// First-run setup: record the goal and seed the first entry.
    pub fn setup(
        &mut self,
        current_weight: f64,
        target_weight: f64,
        unit: Unit,
        target_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<()> {
        if self.settings.setup_complete {
            return Err(ValidationError::SetupAlreadyComplete.into());
        }
        validate_weight(current_weight)?;
        validate_target_weight(target_weight)?;

        self.settings = Settings {
            unit,
            target_weight: Some(target_weight),
            target_date,
            setup_complete: true,
        };
        self.journal = Journal::new();
        self.journal.upsert(today, current_weight, false);
        self.persist()
    }

    /// Log a weight for a date, creating or replacing that date's entry.
    pub fn log(&mut self, date: NaiveDate, weight: f64, fasted_or_omad: bool) -> Result<LogOutcome> {
        self.require_setup()?;
        validate_weight(weight)?;

        let entry_id = self.journal.upsert(date, weight, fasted_or_omad);
        self.persist()?;

        let target = self.settings.target_weight.unwrap_or(0.0);
        Ok(LogOutcome {
            entry_id,
            goal_achieved: weight <= target,
            projection: self.engine.project(self.journal.entries(), target, date),
        })
    }

    /// Edit an existing entry's date, weight, and flag.
    pub fn edit(
        &mut self,
        id: Uuid,
        date: NaiveDate,
        weight: f64,
        fasted_or_omad: bool,
    ) -> Result<()> {
        self.require_setup()?;
        validate_weight(weight)?;
        self.journal.edit(id, date, weight, fasted_or_omad)?;
        self.persist()
    }

    /// Delete an entry.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        self.require_setup()?;
        self.journal.delete(id)?;
        self.persist()
    }

    /// Update goal settings. The unit change is presentation-only; recorded
    /// weights are not rescaled.
    pub fn save_settings(
        &mut self,
        target_weight: f64,
        unit: Unit,
        target_date: Option<NaiveDate>,
    ) -> Result<()> {
        self.require_setup()?;
        validate_target_weight(target_weight)?;
        self.settings.target_weight = Some(target_weight);
        self.settings.unit = unit;
        self.settings.target_date = target_date;
        self.persist()
    }

    /// Goal-date projection as of `now`.
    pub fn projection(&self, now: NaiveDate) -> Projection {
        match self.settings.target_weight {
            Some(target) => self.engine.project(self.journal.entries(), target, now),
            None => Projection::insufficient_data(),
        }
    }

    /// Quick-stats payload as of `now`.
    pub fn progress(&self, now: NaiveDate) -> ProgressSummary {
        ProgressSummary::build(&self.settings, &self.journal, self.projection(now))
    }

    /// History rows, newest first.
    pub fn history(&self) -> Vec<HistoryRow> {
        HistoryRow::list(&self.journal)
    }

    /// Chart series with optional projection overlay, as of `now`.
    pub fn chart(&self, now: NaiveDate) -> ChartSeries {
        ChartSeries::build(&self.settings, &self.journal, &self.projection(now))
    }

    /// Full reset: wipe the snapshot and return to the pre-setup state.
    pub fn reset(&mut self) -> Result<()> {
        self.store.wipe()?;
        self.settings = Settings::default();
        self.journal = Journal::new();
        Ok(())
    }

    fn require_setup(&self) -> Result<()> {
        if self.settings.setup_complete {
            Ok(())
        } else {
            Err(ValidationError::SetupNotComplete.into())
        }
    }

    fn persist(&self) -> Result<()> {
        let snapshot = Snapshot {
            settings: self.settings.clone(),
            entries: self.journal.entries().to_vec(),
        };
        self.store.save(&snapshot).map_err(CoreError::from)
    }
}

fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::MissingWeight { got: weight })
    }
}

fn validate_target_weight(weight: f64) -> Result<(), ValidationError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::MissingTargetWeight { got: weight })
    }
}
