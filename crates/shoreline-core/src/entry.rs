//! Weight entries and change-type classification.
//!
//! A [`WeightEntry`] carries two derived fields, `previous_weight` and
//! `change_type`, which are owned by the journal's recalculation pass and
//! must never be written directly by callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorical label for an entry relative to its predecessor.
///
/// Serialized with the snapshot wire names (`loss-fasted` etc.) so existing
/// snapshots remain readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeType {
    /// Earliest entry in the journal; has no real predecessor.
    Initial,
    Gain,
    LossFasted,
    LossRegular,
    NoChange,
}

impl ChangeType {
    /// Hex color used by the chart and history views.
    pub fn color(self) -> &'static str {
        match self {
            ChangeType::LossFasted => "#2ecc71",
            ChangeType::LossRegular => "#f39c12",
            ChangeType::Gain => "#e74c3c",
            ChangeType::Initial | ChangeType::NoChange => "#95a5a6",
        }
    }
}

/// A single dated weight measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Assigned at creation, stable across edits.
    pub id: Uuid,
    /// Calendar date; the journal enforces at most one entry per date.
    pub date: NaiveDate,
    /// Weight in the unit the settings recorded at entry time.
    pub weight: f64,
    /// Entry was logged under a fasting / one-meal-a-day regimen.
    pub fasted_or_omad: bool,
    /// Derived: weight of the chronologically preceding entry (self for the
    /// earliest entry).
    pub previous_weight: f64,
    /// Derived: classification against `previous_weight`.
    pub change_type: ChangeType,
}

impl WeightEntry {
    /// Create a fresh entry with derived fields seeded as if it were the
    /// only entry. The journal's recalculation pass assigns the real values.
    pub fn new(date: NaiveDate, weight: f64, fasted_or_omad: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            weight,
            fasted_or_omad,
            previous_weight: weight,
            change_type: ChangeType::Initial,
        }
    }

    /// Signed delta to the predecessor (0.0 for the earliest entry).
    pub fn change(&self) -> f64 {
        self.weight - self.previous_weight
    }
}

/// Classify a weight against its predecessor.
///
/// Equality is exact: near-identical weights that differ in the last float
/// bit classify as gain or loss, matching the recorded behavior.
pub fn classify(current: f64, previous: f64, fasted_or_omad: bool) -> ChangeType {
    if current > previous {
        ChangeType::Gain
    } else if current < previous && fasted_or_omad {
        ChangeType::LossFasted
    } else if current < previous {
        ChangeType::LossRegular
    } else {
        ChangeType::NoChange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_gain_ignores_fasted_flag() {
        assert_eq!(classify(82.0, 81.5, false), ChangeType::Gain);
        assert_eq!(classify(82.0, 81.5, true), ChangeType::Gain);
    }

    #[test]
    fn classify_loss_splits_on_fasted_flag() {
        assert_eq!(classify(80.0, 81.0, true), ChangeType::LossFasted);
        assert_eq!(classify(80.0, 81.0, false), ChangeType::LossRegular);
    }

    #[test]
    fn classify_equal_weights_is_no_change() {
        assert_eq!(classify(80.0, 80.0, false), ChangeType::NoChange);
        assert_eq!(classify(80.0, 80.0, true), ChangeType::NoChange);
    }

    #[test]
    fn change_type_serializes_with_kebab_case_wire_names() {
        let json = serde_json::to_string(&ChangeType::LossFasted).unwrap();
        assert_eq!(json, "\"loss-fasted\"");
        let parsed: ChangeType = serde_json::from_str("\"no-change\"").unwrap();
        assert_eq!(parsed, ChangeType::NoChange);
    }

    #[test]
    fn colors_follow_change_type() {
        assert_eq!(ChangeType::LossFasted.color(), "#2ecc71");
        assert_eq!(ChangeType::LossRegular.color(), "#f39c12");
        assert_eq!(ChangeType::Gain.color(), "#e74c3c");
        assert_eq!(ChangeType::Initial.color(), "#95a5a6");
        assert_eq!(ChangeType::NoChange.color(), "#95a5a6");
    }

    #[test]
    fn new_entry_seeds_derived_fields_from_itself() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let entry = WeightEntry::new(date, 90.0, false);
        assert_eq!(entry.previous_weight, 90.0);
        assert_eq!(entry.change_type, ChangeType::Initial);
        assert_eq!(entry.change(), 0.0);
    }
}
