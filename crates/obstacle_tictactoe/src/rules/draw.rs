//! Full-board detection for obstacle tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if every playable cell is occupied.
///
/// Obstacles never count as empty. A full board without a winning run
/// is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_winner;
    use crate::types::{Coord, Symbol};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::standard()));
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X
        // O # O
        // O X X
        let mut board = Board::new(3, 3, [Coord::new(1, 1)]).unwrap();
        let marks = [
            (0, 0, Symbol::X),
            (0, 1, Symbol::O),
            (0, 2, Symbol::X),
            (1, 0, Symbol::O),
            (1, 2, Symbol::O),
            (2, 0, Symbol::O),
            (2, 1, Symbol::X),
            (2, 2, Symbol::X),
        ];
        for (row, col, symbol) in marks {
            board.set(row, col, symbol).unwrap();
        }
        assert!(is_full(&board));
        for (row, col, symbol) in marks {
            assert!(!is_winner(&board, Coord::new(row, col), symbol, 3));
        }
    }

    #[test]
    fn test_full_board_with_line() {
        let mut board = Board::new(1, 3, []).unwrap();
        for col in 0..3 {
            board.set(0, col, Symbol::O).unwrap();
        }
        assert!(is_full(&board));
        assert!(is_winner(&board, Coord::new(0, 2), Symbol::O, 3));
    }
}
