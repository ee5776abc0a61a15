//! Command-line interface for counting_out.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Counting Out - eliminate every K-th player until one remains
#[derive(Parser, Debug)]
#[command(name = "counting_out")]
#[command(about = "Counting-out (Josephus) game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(long, global = true, default_value = "counting_out.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one elimination per command
    Play {
        /// Number of players (prompted for if omitted)
        #[arg(short = 'n', long)]
        players: Option<usize>,

        /// Count out every K-th player (prompted for if omitted)
        #[arg(short = 'k', long)]
        step: Option<usize>,
    },

    /// Print the full elimination order and the winner
    Solve {
        /// Number of players
        #[arg(short = 'n', long)]
        players: Option<usize>,

        /// Count out every K-th player
        #[arg(short = 'k', long)]
        step: Option<usize>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}
