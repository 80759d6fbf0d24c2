//! Tic-Tac-Toe - terminal front end
//!
//! Two players share one keyboard; wins are tallied for the login session.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe::{
    AppConfig, FileStore, MemoryStore, ScoreTracker, Session, SessionStore, Theme, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tictactoe=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(dir) = cli.session_dir {
        config = config.with_session_dir(dir);
    }

    match cli.command.unwrap_or_default() {
        Command::Play { ephemeral, theme } => {
            init_file_logging(config.log_file())?;
            run_play(&config, ephemeral, theme)
        }
        Command::Score { reset } => {
            init_stderr_logging();
            run_score(&config, reset)
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive game
#[instrument(skip(config))]
fn run_play(config: &AppConfig, ephemeral: bool, theme: Option<Theme>) -> Result<()> {
    let theme = theme.unwrap_or(*config.theme());

    let store: Box<dyn SessionStore> = if ephemeral {
        info!("Ephemeral session, score kept in memory");
        Box::new(MemoryStore::new())
    } else {
        let dir = config.resolve_session_dir();
        info!(dir = %dir.display(), "Using session directory");
        Box::new(FileStore::new(dir))
    };

    let session = Session::new(ScoreTracker::load(store), theme);
    run_tui(session)
}

/// Print (and optionally reset) the session scoreboard
#[instrument(skip(config))]
fn run_score(config: &AppConfig, reset: bool) -> Result<()> {
    let dir = config.resolve_session_dir();
    let mut tracker = ScoreTracker::load(Box::new(FileStore::new(&dir)));

    if reset && !tracker.reset() {
        anyhow::bail!("Failed to write score to {}", dir.display());
    }

    println!("{}", tracker.score());
    Ok(())
}
