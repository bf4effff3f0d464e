//! Gomoku Timeline - Unified CLI
//!
//! Five-in-a-row with a rewindable move timeline, playable in the
//! terminal or replayed from a move script.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gomoku_timeline::{Game, Pos};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { log_file } => tui::run(log_file),
        Command::Replay { moves, jump } => run_replay(&moves, jump),
    }
}

/// Replay a move script and print the resulting position
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(moves: &[String], jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting replay");

    let mut game = Game::new();
    for (number, raw) in moves.iter().enumerate() {
        let pos: Pos = raw
            .parse()
            .map_err(|e| anyhow::anyhow!("move {}: {e}", number + 1))?;
        let player = game.to_move();
        let cursor = game
            .request_move(pos)
            .with_context(|| format!("move {} at {pos}", number + 1))?;
        println!("{cursor}. {player} plays {pos}");
    }

    if let Some(target) = jump {
        game.jump_to(target).context("jump after replay")?;
        println!("\nJumped to move {target}");
    }

    println!("\n{}", game.board().display());
    println!("\n{}", game.status());

    Ok(())
}
