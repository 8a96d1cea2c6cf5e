//! Goal-date projection from the recent weight trend.
//!
//! The engine computes an average daily rate of loss over a trailing window
//! (default 28 days) and extrapolates the date the target weight will be
//! reached. When the window holds fewer than two entries the full history is
//! used instead, so users logging for under four weeks still get a
//! projection. Days-to-target rounds up, so the estimate never promises an
//! earlier date than the trend supports.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::WeightEntry;

/// Result of a projection run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Projection {
    /// Latest sampled weight is already at or below the target.
    pub achieved: bool,
    /// Trend is flat or gaining; no forward projection is possible.
    pub no_progress: bool,
    /// Projected date the target is reached, when one exists.
    pub date: Option<NaiveDate>,
    /// Whole days until the target, when a projection exists (0 if achieved).
    pub days: Option<i64>,
    /// Average daily loss over the sample; positive means losing weight.
    pub avg_daily_rate: f64,
}

impl Projection {
    /// Result returned when fewer than two entries exist.
    pub fn insufficient_data() -> Self {
        Self::default()
    }

    /// True when a forward projection exists (not achieved, not stalled,
    /// enough data). Used to decide whether the chart draws an overlay.
    pub fn is_projectable(&self) -> bool {
        self.date.is_some() && !self.achieved && !self.no_progress
    }
}

/// Trend extrapolation engine.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    /// Length of the preferred trailing sample window, in days.
    pub window_days: u64,
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self { window_days: 28 }
    }
}

impl ProjectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_days(window_days: u64) -> Self {
        Self { window_days }
    }

    /// Project the date `target_weight` is reached, as of `now`.
    ///
    /// `entries` must be sorted ascending by date (the journal's order).
    pub fn project(
        &self,
        entries: &[WeightEntry],
        target_weight: f64,
        now: NaiveDate,
    ) -> Projection {
        if entries.len() < 2 {
            return Projection::insufficient_data();
        }

        let window_start = now
            .checked_sub_days(Days::new(self.window_days))
            .unwrap_or(NaiveDate::MIN);
        let window: Vec<&WeightEntry> =
            entries.iter().filter(|e| e.date >= window_start).collect();

        // Prefer the trailing window; fall back to full history when the
        // window is too thin to establish a trend.
        let (oldest, newest) = if window.len() >= 2 {
            (window[0], window[window.len() - 1])
        } else {
            (&entries[0], &entries[entries.len() - 1])
        };

        // Floor of one day guards the same-day case.
        let days_span = (newest.date - oldest.date).num_days().max(1);
        let avg_daily_rate = (oldest.weight - newest.weight) / days_span as f64;

        if newest.weight <= target_weight {
            return Projection {
                achieved: true,
                no_progress: false,
                date: Some(now),
                days: Some(0),
                avg_daily_rate,
            };
        }

        if avg_daily_rate <= 0.0 {
            return Projection {
                achieved: false,
                no_progress: true,
                date: None,
                days: None,
                avg_daily_rate,
            };
        }

        let days_to_target = ((newest.weight - target_weight) / avg_daily_rate).ceil() as i64;
        let projected_date = now
            .checked_add_days(Days::new(days_to_target as u64))
            .unwrap_or(NaiveDate::MAX);

        Projection {
            achieved: false,
            no_progress: false,
            date: Some(projected_date),
            days: Some(days_to_target),
            avg_daily_rate,
        }
    }
}
