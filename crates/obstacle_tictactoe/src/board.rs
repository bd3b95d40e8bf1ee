//! Grid of cells with a fixed obstacle mask.

use crate::error::{IllegalReason, LayoutError, MoveError};
use crate::types::{CellValue, Coord, Symbol};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Side length of the standard board.
pub const STANDARD_SIZE: usize = 5;

/// Obstacles of the standard board.
pub const STANDARD_OBSTACLES: [Coord; 2] = [Coord::new(1, 1), Coord::new(3, 3)];

/// Largest number of cells a board may have.
pub const MAX_CELLS: usize = 1 << 20;

/// Rectangular board whose obstacle layout never changes.
///
/// Cells are stored row-major. Obstacle cells permanently read as
/// [`CellValue::Obstacle`]; every other cell is empty or holds a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    obstacles: BTreeSet<Coord>,
    cells: Vec<CellValue>,
}

impl Board {
    /// Creates an empty board with the given obstacle layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroDimension`] if either dimension is zero,
    /// [`LayoutError::TooLarge`] if the grid exceeds [`MAX_CELLS`] and
    /// [`LayoutError::ObstacleOutOfRange`] if an obstacle lies off the grid.
    #[instrument(skip(obstacles))]
    pub fn new(
        rows: usize,
        cols: usize,
        obstacles: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::ZeroDimension { rows, cols });
        }
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(LayoutError::TooLarge { rows, cols })?;

        let mut board = Self {
            rows,
            cols,
            obstacles: BTreeSet::new(),
            cells: vec![CellValue::Empty; size],
        };
        for coord in obstacles {
            if !board.contains(coord.row, coord.col) {
                return Err(LayoutError::ObstacleOutOfRange(coord));
            }
            let idx = board.index(coord.row, coord.col);
            board.cells[idx] = CellValue::Obstacle;
            board.obstacles.insert(coord);
        }

        debug!(obstacles = board.obstacles.len(), "Board created");
        Ok(board)
    }

    /// Creates the standard 5x5 board.
    pub fn standard() -> Self {
        match Self::new(STANDARD_SIZE, STANDARD_SIZE, STANDARD_OBSTACLES) {
            Ok(board) => board,
            Err(e) => unreachable!("standard layout is valid: {e}"),
        }
    }

    /// Board height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The fixed obstacle layout.
    pub fn obstacles(&self) -> &BTreeSet<Coord> {
        &self.obstacles
    }

    /// Returns true if the coordinate lies on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns true iff the coordinate is a fixed obstacle.
    ///
    /// Coordinates off the grid are never obstacles.
    pub fn is_obstacle(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.cells[self.index(row, col)] == CellValue::Obstacle
    }

    /// Reads a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates off the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<CellValue, MoveError> {
        self.check_range(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Writes a mark into an empty, non-obstacle cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates off the grid and
    /// [`MoveError::IllegalMove`] if the cell is an obstacle or occupied.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), MoveError> {
        self.check_range(row, col)?;
        let idx = self.index(row, col);
        let reason = match self.cells[idx] {
            CellValue::Empty => {
                self.cells[idx] = CellValue::Mark(symbol);
                return Ok(());
            }
            CellValue::Obstacle => IllegalReason::Obstacle,
            CellValue::Mark(_) => IllegalReason::Occupied,
        };
        debug!(%reason, "Rejected write");
        Err(MoveError::IllegalMove {
            coord: Coord::new(row, col),
            reason,
        })
    }

    /// Clears every mark; obstacles are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if let CellValue::Mark(_) = cell {
                *cell = CellValue::Empty;
            }
        }
    }

    /// Returns true iff every non-obstacle cell holds a mark.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&CellValue::Empty)
    }

    /// All non-obstacle coordinates, row-major.
    pub fn playable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .filter(|c| self.cells[self.index(c.row, c.col)] != CellValue::Obstacle)
    }

    /// Playable coordinates that are still empty, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .filter(|c| self.cells[self.index(c.row, c.col)] == CellValue::Empty)
    }

    fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    fn check_range(&self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(MoveError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = match self.cells[self.index(row, col)] {
                    CellValue::Empty => ".".to_string(),
                    CellValue::Mark(symbol) => symbol.to_string(),
                    CellValue::Obstacle => "#".to_string(),
                };
                write!(f, "{}", glyph)?;
            }
        }
        Ok(())
    }
}
