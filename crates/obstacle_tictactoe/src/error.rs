//! Error types for board and move validation.

use crate::types::Coord;
use derive_more::{Display, Error};

/// Why a move targeting an in-range cell was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalReason {
    /// The cell is a fixed obstacle.
    #[display("cell is an obstacle")]
    Obstacle,
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
}

/// Error that can occur when reading or writing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinate lies outside the grid.
    #[display("({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board height.
        rows: usize,
        /// Board width.
        cols: usize,
    },

    /// The cell cannot take a mark.
    #[display("Illegal move at {coord}: {reason}")]
    IllegalMove {
        /// Targeted cell.
        coord: Coord,
        /// Why the cell was refused.
        reason: IllegalReason,
    },
}

impl MoveError {
    /// Returns true for [`MoveError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. })
    }

    /// Returns true for [`MoveError::IllegalMove`].
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::IllegalMove { .. })
    }
}

/// Error building a board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LayoutError {
    /// Rows or columns were zero.
    #[display("Board dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension {
        /// Requested height.
        rows: usize,
        /// Requested width.
        cols: usize,
    },

    /// The grid has more cells than [`MAX_CELLS`](crate::MAX_CELLS).
    #[display("Board of {rows}x{cols} exceeds the cell limit")]
    TooLarge {
        /// Requested height.
        rows: usize,
        /// Requested width.
        cols: usize,
    },

    /// An obstacle lies outside the grid.
    #[display("Obstacle {_0} is outside the board")]
    ObstacleOutOfRange(#[error(not(source))] Coord),
}
