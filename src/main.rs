use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flashcard_rewards::config::Config;
use flashcard_rewards::store::SqliteStore;
use flashcard_rewards::{Ledger, RewardAction};

mod cli;

#[derive(Parser)]
#[command(name = "flashcard-rewards")]
#[command(about = "Points, levels and reward history for flashcard study")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.flashcard/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the rewards database (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current level, points and progress
    Status,

    /// Record a rewarded action (e.g. COMPLETE_CARD, daily-login)
    Award {
        /// Action key
        action: RewardAction,
    },

    /// Show recent reward history
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show all levels and which are unlocked
    Levels,

    /// Show rewarded actions and their points
    Actions,

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool, default_level: &str) {
    let log_level = if verbose { "debug" } else { default_level };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Status);

    if let Commands::Init { force } = command {
        init_logging(cli.verbose, "info");
        let config_path = cli.config.unwrap_or_else(Config::global_config_path);
        return cli::init::init_command(&config_path, force);
    }

    let config = match &cli.config {
        Some(path) => Config::load_or_init(path)?,
        None => Config::load()?,
    };
    init_logging(cli.verbose, &config.logging.level);

    let db_path = cli.db.unwrap_or_else(|| config.database_path());
    tracing::debug!("Using rewards db {}", db_path.display());
    let ledger = Ledger::new(SqliteStore::open(&db_path)?);

    match command {
        Commands::Status => cli::status::status_command(&ledger)?,
        Commands::Award { action } => cli::award::award_command(&ledger, action)?,
        Commands::History { limit } => cli::history::history_command(&ledger, limit)?,
        Commands::Levels => cli::levels::levels_command(&ledger)?,
        Commands::Actions => cli::levels::actions_command(),
        // Handled before the config is loaded
        Commands::Init { .. } => {}
    }

    Ok(())
}
