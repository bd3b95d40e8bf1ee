//! Win detection around obstacles.

use crate::board::Board;
use crate::types::{CellValue, Coord, Symbol};
use tracing::instrument;

/// Horizontal, vertical, main diagonal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Returns the run of `symbol` through `coord` if it is at least
/// `win_length` cells long in any direction.
///
/// A run stops at the grid edge, an obstacle, an empty cell or the
/// opponent's mark. On the standard 5x5 board with a win length of 5 this
/// means a whole row, column or diagonal with no obstacle on it.
#[instrument(skip(board))]
pub fn winning_line(
    board: &Board,
    coord: Coord,
    symbol: Symbol,
    win_length: usize,
) -> Option<Vec<Coord>> {
    if board.get(coord.row, coord.col).ok()? != CellValue::Mark(symbol) {
        return None;
    }

    for (dr, dc) in DIRECTIONS {
        let mut backward = walk(board, coord, symbol, -dr, -dc);
        let forward = walk(board, coord, symbol, dr, dc);
        if backward.len() + 1 + forward.len() >= win_length {
            backward.reverse();
            backward.push(coord);
            backward.extend(forward);
            return Some(backward);
        }
    }

    None
}

/// Returns true if `symbol` has a winning run through `coord`.
pub fn is_winner(board: &Board, coord: Coord, symbol: Symbol, win_length: usize) -> bool {
    winning_line(board, coord, symbol, win_length).is_some()
}

/// Consecutive cells holding `symbol`, starting next to `from`.
fn walk(board: &Board, from: Coord, symbol: Symbol, dr: isize, dc: isize) -> Vec<Coord> {
    let mut run = Vec::new();
    let mut current = from;
    while let Some(next) = step(current, dr, dc) {
        match board.get(next.row, next.col) {
            Ok(CellValue::Mark(s)) if s == symbol => {
                run.push(next);
                current = next;
            }
            _ => break,
        }
    }
    run
}

fn step(coord: Coord, dr: isize, dc: isize) -> Option<Coord> {
    let row = coord.row.checked_add_signed(dr)?;
    let col = coord.col.checked_add_signed(dc)?;
    Some(Coord::new(row, col))
}
