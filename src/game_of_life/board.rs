//! Board representation and utilities for Game of Life

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a board from a persisted grid
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Board must have at least one row and one column")]
    Empty,

    #[error("Row {row} has length {len}, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },

    #[error("Board must be square, got {rows} rows of {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("Board side {size} is too large to allocate")]
    TooLarge { size: usize },

    #[error("Malformed board JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raised on cell access outside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Coordinates ({row}, {col}) out of bounds for {size}x{size} board")]
pub struct IndexError {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

/// A square Game of Life board with hard (non-wrapping) edges.
///
/// Cells are stored row-major. Serializes as a bare JSON array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create a board of `size`x`size` dead cells
    pub fn blank(size: usize) -> Result<Self, FormatError> {
        if size == 0 {
            return Err(FormatError::Empty);
        }

        let len = size
            .checked_mul(size)
            .ok_or(FormatError::TooLarge { size })?;

        Ok(Self {
            size,
            cells: vec![false; len],
        })
    }

    /// Create a board from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, FormatError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(FormatError::Empty);
        }

        // Verify all rows have the same length
        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != cols {
                return Err(FormatError::Ragged {
                    row,
                    len: cells_in_row.len(),
                    expected: cols,
                });
            }
        }

        if rows != cols {
            return Err(FormatError::NotSquare { rows, cols });
        }

        Ok(Self {
            size: rows,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Nested row-major copy of the cells, the inverse of [`Board::from_cells`]
    pub fn to_cells(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, IndexError> {
        if row < self.size && col < self.size {
            Ok(self.index(row, col))
        } else {
            Err(IndexError {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> Result<bool, IndexError> {
        self.check_bounds(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), IndexError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living cells in the Moore neighborhood of `(row, col)`.
    ///
    /// Neighbors past the edge do not contribute. Panics if `(row, col)` is
    /// itself off the board.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.size && col < self.size,
            "neighbor query ({row}, {col}) outside {0}x{0} board",
            self.size
        );

        let size = self.size as isize;
        let mut count = 0;

        for (dr, dc) in iproduct!(-1isize..=1, -1isize..=1) {
            if dr == 0 && dc == 0 {
                continue; // Skip the cell itself
            }

            let r = row as isize + dr;
            let c = col as isize + dc;

            let in_bounds = r >= 0 && r < size && c >= 0 && c < size;
            if in_bounds && self.cells[self.index(r as usize, c as usize)] {
                count += 1;
            }
        }

        count
    }

    /// Overwrite a cell the caller already knows is on the board
    pub(crate) fn commit(&mut self, row: usize, col: usize, value: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(row, col)| self.cells[self.index(row, col)])
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl TryFrom<Vec<Vec<bool>>> for Board {
    type Error = FormatError;

    fn try_from(cells: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Vec<Vec<bool>> {
    fn from(board: Board) -> Self {
        board.to_cells()
    }
}
