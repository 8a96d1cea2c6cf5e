use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "shoreline", version, about = "Shoreline weight journal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// First-run setup: record your goal and starting weight
    Setup(commands::setup::SetupArgs),
    /// Weight entry management
    Entry {
        #[command(subcommand)]
        action: commands::entry::EntryAction,
    },
    /// Progress, projection, and chart data
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Goal settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Delete all data and return to first-run state
    Reset {
        /// Confirm the wipe; without this flag nothing is deleted
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(args),
        Commands::Entry { action } => commands::entry::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Reset { yes } => commands::setup::reset(yes),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
