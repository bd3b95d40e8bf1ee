//! Obstacle Tic-Tac-Toe - command-line driver
//!
//! Loads a board layout and replays scripted moves through the engine.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use console::ConsoleObserver;
use obstacle_tictactoe::{Coord, EventLog, GameConfig};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Layout => run_layout(&config),
        Command::Play { moves, json } => run_play(&config, &moves, json),
    }
}

/// Reads the config file, or falls back to the standard layout.
#[instrument]
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display())),
        None => {
            info!("No config given, using the standard layout");
            Ok(GameConfig::default())
        }
    }
}

/// Print the empty board
fn run_layout(config: &GameConfig) -> Result<()> {
    let board = config.build_board()?;
    println!("{board}");
    println!(
        "{} playable cells, {} obstacles",
        board.playable_cells().count(),
        board.obstacles().len()
    );
    Ok(())
}

/// Replay moves and report the outcome
#[instrument(skip(config, moves), fields(moves = moves.len()))]
fn run_play(config: &GameConfig, moves: &[Coord], json: bool) -> Result<()> {
    let mut controller = config.build_controller()?;

    let console = Rc::new(RefCell::new(ConsoleObserver::default()));
    let log = EventLog::shared();
    controller.register(&console);
    controller.register(&log);

    for (turn, coord) in moves.iter().enumerate() {
        if controller.state().is_terminal() {
            warn!(%coord, "Round already over, remaining moves are ignored");
        }
        controller
            .play(coord.row, coord.col)
            .with_context(|| format!("Move {} at {}", turn + 1, coord))?;
    }

    if json {
        let events = log.borrow_mut().take();
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        println!("{}", controller.board());
        println!("{}", console.borrow().status());
    }
    Ok(())
}
