use chrono::NaiveDate;
use clap::Subcommand;
use shoreline_core::Tracker;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Current weight, target, remaining delta, and projection
    Summary {
        /// Reference date for the projection (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Goal-date projection only
    Projection {
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Chart series with optional projection overlay
    Chart {
        #[arg(long)]
        on: Option<NaiveDate>,
    },
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = Tracker::open()?;

    match action {
        ProgressAction::Summary { on } => {
            let summary = tracker.progress(super::date_or_today(on));
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        ProgressAction::Projection { on } => {
            let projection = tracker.projection(super::date_or_today(on));
            println!("{}", serde_json::to_string_pretty(&projection)?);
        }
        ProgressAction::Chart { on } => {
            let chart = tracker.chart(super::date_or_today(on));
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
    }
    Ok(())
}
