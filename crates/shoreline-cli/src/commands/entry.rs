use chrono::NaiveDate;
use clap::Subcommand;
use shoreline_core::Tracker;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum EntryAction {
    /// Log a weight (replaces any existing entry for the date)
    Add {
        /// Weight in the configured unit
        #[arg(long)]
        weight: f64,
        /// Entry date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Weight was recorded under a fasting / OMAD regimen
        #[arg(long)]
        fasted: bool,
    },
    /// Edit an entry by id
    Edit {
        id: Uuid,
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        fasted: bool,
    },
    /// Delete an entry by id
    Delete { id: Uuid },
    /// List all entries, newest first
    List,
}

pub fn run(action: EntryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::open()?;

    match action {
        EntryAction::Add { weight, date, fasted } => {
            let date = super::date_or_today(date);
            let outcome = tracker.log(date, weight, fasted)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        EntryAction::Edit {
            id,
            weight,
            date,
            fasted,
        } => {
            tracker.edit(id, date, weight, fasted)?;
            println!("{}", serde_json::to_string_pretty(&tracker.history())?);
        }
        EntryAction::Delete { id } => {
            tracker.delete(id)?;
            println!("deleted {id}");
        }
        EntryAction::List => {
            println!("{}", serde_json::to_string_pretty(&tracker.history())?);
        }
    }
    Ok(())
}
