//! User settings stored inside the snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display and storage unit for weights.
///
/// Presentation-only: changing the unit does not rescale recorded weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Lb,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Lb => "lb",
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "lb" | "lbs" => Ok(Unit::Lb),
            other => Err(format!("unknown unit '{other}', expected kg or lb")),
        }
    }
}

/// Goal configuration and first-run state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_unit")]
    pub unit: Unit,
    /// Goal weight; `None` only before first-run setup.
    #[serde(default)]
    pub target_weight: Option<f64>,
    /// User-chosen aspirational date. Advisory only; the projection engine
    /// never reads it.
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub setup_complete: bool,
}

fn default_unit() -> Unit {
    Unit::Kg
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: Unit::Kg,
            target_weight: None,
            target_date: None,
            setup_complete: false,
        }
    }
}
