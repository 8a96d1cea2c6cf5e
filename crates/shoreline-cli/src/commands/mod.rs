pub mod entry;
pub mod progress;
pub mod settings;
pub mod setup;

use chrono::NaiveDate;

/// Parse a `--on` style date argument, defaulting to today.
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}
