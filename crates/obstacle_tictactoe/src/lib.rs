//! Obstacle tic-tac-toe game engine.
//!
//! A 5x5 tic-tac-toe variant where some cells are permanently blocked.
//! The engine is pure, synchronous logic with no presentation concerns.
//!
//! # Architecture
//!
//! - **Board**: grid of cells plus the fixed obstacle mask
//! - **Rules**: win and draw detection around obstacles
//! - **GameController**: turns, move legality and round state
//! - **Observers**: the notification contract a presentation layer implements
//!
//! # Example
//!
//! ```
//! use obstacle_tictactoe::{Board, EventLog, GameController, GameState};
//!
//! let mut controller = GameController::new(Board::standard());
//! let log = EventLog::shared();
//! controller.register(&log);
//!
//! assert_eq!(controller.play(0, 0), Ok(GameState::InProgress));
//! assert!(controller.play(1, 1).is_err()); // obstacle
//! assert_eq!(log.borrow().events().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod controller;
mod error;
pub mod invariants;
mod observer;
pub mod rules;
mod types;

// Crate-level exports - Domain types
pub use types::{CellValue, Coord, GameState, Symbol};

// Crate-level exports - Board
pub use board::{Board, MAX_CELLS, STANDARD_OBSTACLES, STANDARD_SIZE};

// Crate-level exports - Errors
pub use error::{IllegalReason, LayoutError, MoveError};

// Crate-level exports - Controller and events
pub use action::{GameEvent, Move};
pub use controller::{DEFAULT_WIN_LENGTH, GameController};
pub use observer::{EventLog, GameObserver, ObserverList};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
