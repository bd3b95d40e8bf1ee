//! First-class move and event records.
//!
//! Moves are domain events, not side effects. The controller keeps the
//! moves of the current round, and observers can capture what they were
//! told as [`GameEvent`]s for logging or replay.

use crate::types::{Coord, GameState, Symbol};
use serde::{Deserialize, Serialize};

/// A player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub symbol: Symbol,
    /// The cell receiving the mark.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, coord: Coord) -> Self {
        Self { symbol, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.coord)
    }
}

/// A notification delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A mark was placed.
    BoardChanged {
        /// Cell that changed.
        coords: Coord,
        /// Mark placed there.
        symbol: Symbol,
    },
    /// The round state was (re)evaluated.
    StateChanged {
        /// New state.
        state: GameState,
        /// Player to move; `None` once the round is over.
        next_turn: Option<Symbol>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Symbol::O, Coord::new(3, 0));
        assert_eq!(mov.to_string(), "O -> (3, 0)");
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::StateChanged {
            state: GameState::XWon,
            next_turn: None,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["event"], "state_changed");
        assert_eq!(json["state"], "XWon");
        assert!(json["next_turn"].is_null());
    }
}
