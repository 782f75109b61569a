pub mod commands;
pub mod config;
pub mod render;
pub mod vault;

use chrono::Local;
use clap::{Parser, Subcommand};
use review_core::Scheduler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::vault::Vault;

#[derive(Parser)]
#[command(name = "rs", about = "Fixed-interval review scheduler", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize the scheduler in the current directory
    Init,

    /// Record a study date and schedule its reviews
    Add {
        /// Study date (YYYY-MM-DD) or "today"
        date: String,
    },

    /// Write a report of the reviews due on a date
    Review {
        /// Review date (YYYY-MM-DD) or "today"
        date: String,

        /// Recompute the date instead of using the cached result
        #[arg(long)]
        refresh: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let cwd = std::env::current_dir()?;
    let today = Local::now().date_naive();
    let scheduler = Scheduler::default();

    match cli.command {
        Command::Init => {
            let vault = commands::init_vault(&cwd, &config)?;
            println!("Initialized review scheduler in {}", vault.dir().display());
        }
        Command::Add { date } => {
            let vault = Vault::locate(&cwd, &config.vault_dir)?;
            let outcome = commands::add_study_date(&vault, &scheduler, &date, today)?;
            println!(
                "Added {}: reviews on {}",
                outcome.study_date,
                outcome.review_dates.join(", ")
            );
        }
        Command::Review { date, refresh } => {
            let vault = Vault::locate(&cwd, &config.vault_dir)?;
            let outcome =
                commands::review_date(&vault, &scheduler, &config, &cwd, &date, today, refresh)?;
            println!(
                "{} review(s) due on {}, report written to {}",
                outcome.groups.len(),
                outcome.review_date,
                outcome.report_path.display()
            );
        }
    }

    Ok(())
}
