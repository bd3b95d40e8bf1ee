//! Obstacle integrity invariant: the obstacle mask never drifts.

use super::Invariant;
use crate::controller::GameController;

/// Invariant: exactly the configured obstacles read as obstacles.
pub struct ObstacleIntegrityInvariant;

impl Invariant<GameController> for ObstacleIntegrityInvariant {
    fn holds(controller: &GameController) -> bool {
        let board = controller.board();
        let blocked = (0..board.rows())
            .flat_map(|row| (0..board.cols()).map(move |col| (row, col)))
            .filter(|&(row, col)| board.is_obstacle(row, col))
            .count();

        blocked == board.obstacles().len()
            && board
                .obstacles()
                .iter()
                .all(|c| board.is_obstacle(c.row, c.col))
    }

    fn description() -> &'static str {
        "Obstacle cells match the fixed obstacle layout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_across_rounds() {
        let mut controller = GameController::default();
        controller.play(0, 0).unwrap();
        assert!(ObstacleIntegrityInvariant::holds(&controller));
        controller.reset();
        assert!(ObstacleIntegrityInvariant::holds(&controller));
    }
}
