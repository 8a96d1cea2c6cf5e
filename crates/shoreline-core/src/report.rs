//! Read-side payloads for the presentation layer.
//!
//! Data contracts behind the app's views: quick stats with the projection,
//! the newest-first history list, and the chart series with an optional
//! projection overlay point.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::{ChangeType, WeightEntry};
use crate::journal::Journal;
use crate::projection::Projection;
use crate::settings::{Settings, Unit};

/// Quick-stats payload: current weight, goal, remaining delta, projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub unit: Unit,
    pub current_weight: Option<f64>,
    pub target_weight: Option<f64>,
    /// `current - target`; negative or zero means the goal is met.
    pub to_go: Option<f64>,
    pub projection: Projection,
}

impl ProgressSummary {
    pub fn build(settings: &Settings, journal: &Journal, projection: Projection) -> Self {
        let current_weight = journal.current_weight();
        let target_weight = settings.target_weight;
        let to_go = match (current_weight, target_weight) {
            (Some(current), Some(target)) => Some(current - target),
            _ => None,
        };
        Self {
            unit: settings.unit,
            current_weight,
            target_weight,
            to_go,
            projection,
        }
    }
}

/// One row of the history view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRow {
    pub id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub fasted_or_omad: bool,
    /// Signed delta to the predecessor (0.0 for the earliest entry).
    pub change: f64,
    pub change_type: ChangeType,
    /// Hex color keyed off the change type.
    pub color: String,
}

impl HistoryRow {
    fn from_entry(entry: &WeightEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            weight: entry.weight,
            fasted_or_omad: entry.fasted_or_omad,
            change: entry.change(),
            change_type: entry.change_type,
            color: entry.change_type.color().to_string(),
        }
    }

    /// History rows, newest first.
    pub fn list(journal: &Journal) -> Vec<HistoryRow> {
        journal.entries().iter().rev().map(Self::from_entry).collect()
    }
}

/// Chart data: the ascending weight series plus goal and projection overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub dates: Vec<NaiveDate>,
    pub weights: Vec<f64>,
    /// Per-point hex color from the entry's change type.
    pub colors: Vec<String>,
    pub target_weight: Option<f64>,
    /// Overlay endpoint `(projected_date, target_weight)`; present only when
    /// a forward projection exists. The overlay segment runs from the last
    /// real point to this one.
    pub projection_point: Option<(NaiveDate, f64)>,
}

impl ChartSeries {
    pub fn build(settings: &Settings, journal: &Journal, projection: &Projection) -> Self {
        let entries = journal.entries();
        let projection_point = match (projection.date, settings.target_weight) {
            (Some(date), Some(target)) if projection.is_projectable() => Some((date, target)),
            _ => None,
        };
        Self {
            dates: entries.iter().map(|e| e.date).collect(),
            weights: entries.iter().map(|e| e.weight).collect(),
            colors: entries.iter().map(|e| e.change_type.color().to_string()).collect(),
            target_weight: settings.target_weight,
            projection_point,
        }
    }
}
