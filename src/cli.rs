//! Command-line interface for gomoku_timeline.

use clap::{Parser, Subcommand};

/// Gomoku Timeline - five-in-a-row with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "gomoku_timeline")]
#[command(about = "Five-in-a-row on a 15x15 board with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Write tracing output to this file (the TUI owns the screen)
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,
    },

    /// Replay a scripted sequence of moves and print the final position
    Replay {
        /// Moves as "row,col" pairs or flat cell indices (0-224)
        #[arg(required = true)]
        moves: Vec<String>,

        /// Jump the cursor to this move index after the replay
        #[arg(long)]
        jump: Option<usize>,
    },
}
