//! Monotonic board invariant: the board is exactly its move history.

use super::Invariant;
use crate::controller::GameController;

/// Invariant: every mark on the board came from an accepted move.
///
/// Replaying the round's history on a cleared copy of the board must
/// succeed move by move and reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameController> for MonotonicBoardInvariant {
    fn holds(controller: &GameController) -> bool {
        let mut reconstructed = controller.board().clone();
        reconstructed.reset();

        for mov in controller.history() {
            if reconstructed
                .set(mov.coord.row, mov.coord.col, mov.symbol)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *controller.board()
    }

    fn description() -> &'static str {
        "Board marks match the move history (never overwritten)"
    }
}
