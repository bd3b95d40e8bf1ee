//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::controller::GameController;
use crate::types::{GameState, Symbol};

/// Invariant: players alternate turns, X first.
///
/// While the round is in progress the player to move must match the
/// parity of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameController> for AlternatingTurnInvariant {
    fn holds(controller: &GameController) -> bool {
        let history = controller.history();

        if let Some(first) = history.first()
            && first.symbol != Symbol::X
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].symbol == pair[1].symbol) {
            return false;
        }

        if controller.state() != GameState::InProgress {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        };
        controller.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
