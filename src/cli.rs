//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Theme;

/// Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a session scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (optional, defaults apply if missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Session directory holding the scoreboard
    #[arg(long, global = true)]
    pub session_dir: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Keep the score in memory only
        #[arg(long)]
        ephemeral: bool,

        /// Starting theme (overrides the config file)
        #[arg(long)]
        theme: Option<Theme>,
    },

    /// Print the session scoreboard
    Score {
        /// Set both counters back to zero
        #[arg(long)]
        reset: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play {
            ephemeral: false,
            theme: None,
        }
    }
}
