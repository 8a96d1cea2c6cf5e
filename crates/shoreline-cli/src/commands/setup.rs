use chrono::NaiveDate;
use clap::Args;
use shoreline_core::{Tracker, Unit};

#[derive(Args)]
pub struct SetupArgs {
    /// Current weight
    #[arg(long)]
    weight: f64,
    /// Target weight
    #[arg(long)]
    target: f64,
    /// Display unit
    #[arg(long, default_value = "kg")]
    unit: Unit,
    /// Aspirational target date (YYYY-MM-DD, advisory only)
    #[arg(long)]
    target_date: Option<NaiveDate>,
    /// Date of the first entry (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run(args: SetupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::open()?;
    let today = super::date_or_today(args.date);
    tracker.setup(args.weight, args.target, args.unit, args.target_date, today)?;
    println!("{}", serde_json::to_string_pretty(tracker.settings())?);
    Ok(())
}

pub fn reset(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err("refusing to delete all data; pass --yes to confirm".into());
    }
    let mut tracker = Tracker::open()?;
    tracker.reset()?;
    println!("all data deleted");
    Ok(())
}
