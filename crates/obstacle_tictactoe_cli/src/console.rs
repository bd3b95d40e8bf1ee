//! Observer that narrates the game through tracing.

use obstacle_tictactoe::{Coord, GameObserver, GameState, Symbol};
use tracing::info;

/// Logs every notification and remembers the latest status line.
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    status: String,
}

impl ConsoleObserver {
    /// Human-readable status after the last notification.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl GameObserver for ConsoleObserver {
    fn on_board_change(&mut self, coords: Coord, symbol: Symbol) {
        info!(%coords, %symbol, "Mark placed");
    }

    fn on_state_change(&mut self, state: GameState, next_turn: Option<Symbol>) {
        self.status = match (state.winner(), next_turn) {
            (Some(winner), _) => format!("{winner} wins!"),
            (None, Some(turn)) => format!("{turn}'s turn"),
            (None, None) => "Draw!".to_string(),
        };
        info!(?state, status = %self.status, "State changed");
    }
}
