use chrono::NaiveDate;
use clap::Subcommand;
use shoreline_core::{Tracker, Unit};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Update goal settings (unit changes do not rescale recorded weights)
    Set {
        /// Target weight
        #[arg(long)]
        target: f64,
        /// Display unit
        #[arg(long)]
        unit: Option<Unit>,
        /// Aspirational target date; omit the flag to clear a stored date
        #[arg(long)]
        target_date: Option<NaiveDate>,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::open()?;

    match action {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(tracker.settings())?);
        }
        SettingsAction::Set {
            target,
            unit,
            target_date,
        } => {
            let unit = unit.unwrap_or(tracker.settings().unit);
            tracker.save_settings(target, unit, target_date)?;
            println!("{}", serde_json::to_string_pretty(tracker.settings())?);
        }
    }
    Ok(())
}
