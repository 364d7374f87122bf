mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daygrid_core::daygrid_config::DaygridConfig;
use daygrid_core::WeekStart;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daygrid")]
#[command(about = "Browse a month grid and plan timed schedules on its days")]
struct Cli {
    /// First column of the grid (sunday or monday), overrides the config file
    #[arg(long, global = true)]
    week_start: Option<WeekStart>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the month grid
    Month {
        /// Any day in the month to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Replay a TOML plan of schedules and print the resulting month
    Plan {
        /// Plan file with [[schedule]] entries
        file: PathBuf,

        /// Month to show afterwards (YYYY-MM-DD), defaults to the first planned day
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Write a commented default config file if none exists
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        return init_config();
    }

    let mut config = DaygridConfig::load()?;
    if let Some(week_start) = cli.week_start {
        config.week_start = week_start;
    }

    match cli.command {
        Commands::Month { date } => {
            let reference = commands::reference_date(date.as_deref())?;
            commands::month::run(reference, &config)
        }
        Commands::Plan { file, date } => {
            let reference = date
                .as_deref()
                .map(|d| commands::reference_date(Some(d)))
                .transpose()?;
            commands::plan::run(&file, reference, &config)
        }
        Commands::Init => Ok(()),
    }
}

fn init_config() -> Result<()> {
    let path = DaygridConfig::config_path()?;

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    DaygridConfig::create_default_config(&path)?;
    println!("Created {}", path.display());
    Ok(())
}
