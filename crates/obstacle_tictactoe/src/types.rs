//! Core domain types for obstacle tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Symbol {
    /// Returns the opponent's symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell coordinate, zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// What a single cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    /// Playable and unoccupied.
    Empty,
    /// Occupied by a player.
    Mark(Symbol),
    /// Permanently blocked.
    Obstacle,
}

impl CellValue {
    /// Returns the mark in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            CellValue::Mark(symbol) => Some(symbol),
            CellValue::Empty | CellValue::Obstacle => None,
        }
    }
}

/// Status of the current round.
///
/// Only [`GameState::InProgress`] accepts moves; the other three are
/// terminal until the controller is reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum GameState {
    /// Round is ongoing.
    InProgress,
    /// X completed a line.
    XWon,
    /// O completed a line.
    OWon,
    /// Every playable cell is occupied and nobody won.
    Draw,
}

impl GameState {
    /// The winning state for `symbol`.
    pub fn won_by(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => GameState::XWon,
            Symbol::O => GameState::OWon,
        }
    }

    /// Returns the winner, if the round ended in a win.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameState::XWon => Some(Symbol::X),
            GameState::OWon => Some(Symbol::O),
            GameState::InProgress | GameState::Draw => None,
        }
    }

    /// Returns true for X_WON, O_WON and DRAW.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }
}
