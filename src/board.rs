//! Game board state: a flat, row-major grid of cells.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Token};
use crate::config::EMPTY_CELL;

/// N×N grid of cells, each empty or holding a player token.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<T: Token> {
    dimension: usize,
    cells: Vec<Option<T>>,
}

impl<T: Token> Board<T> {
    /// Create a board of `dimension`×`dimension` empty cells.
    pub fn new(dimension: usize) -> Self {
        Board {
            dimension,
            cells: alloc::vec![None; dimension * dimension],
        }
    }

    /// Length of one side of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells (`dimension²`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Immutable row-major view of every cell.
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Indices of all empty cells in ascending order.
    pub fn available_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Returns `true` when no cell holds a token.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns `true` when every cell holds a token.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_cell_available(&self, index: usize) -> Result<bool, BoardError> {
        Ok(self.get_cell(index)?.is_none())
    }

    /// Token at `index`, or `None` for an empty cell.
    pub fn get_cell(&self, index: usize) -> Result<Option<T>, BoardError> {
        self.check_bounds(index)?;
        Ok(self.cells[index])
    }

    /// Overwrite the cell at `index`. Availability is the caller's concern.
    pub fn set_cell(&mut self, index: usize, token: T) -> Result<(), BoardError> {
        self.check_bounds(index)?;
        self.cells[index] = Some(token);
        Ok(())
    }

    /// Every winning line: rows, then columns, then the main and anti diagonal.
    ///
    /// Always `2N + 2` lines of `N` indices each (empty for `N == 0`).
    pub fn win_patterns(&self) -> Vec<Vec<usize>> {
        let n = self.dimension;
        if n == 0 {
            return Vec::new();
        }
        let mut patterns = Vec::with_capacity(2 * n + 2);
        for row in 0..n {
            patterns.push((0..n).map(|col| row * n + col).collect());
        }
        for col in 0..n {
            patterns.push((0..n).map(|row| row * n + col).collect());
        }
        patterns.push((0..n).map(|i| i * (n + 1)).collect());
        patterns.push((1..=n).map(|i| i * (n - 1)).collect());
        patterns
    }

    #[inline]
    fn check_bounds(&self, index: usize) -> Result<(), BoardError> {
        if index >= self.cells.len() {
            Err(BoardError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Rows of cells, one line per row, each line newline-terminated.
impl<T: Token> fmt::Display for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension == 0 {
            return writeln!(f);
        }
        for row in self.cells.chunks(self.dimension) {
            for cell in row {
                match cell {
                    Some(token) => write!(f, "{}", token)?,
                    None => write!(f, "{}", EMPTY_CELL)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Token> fmt::Debug for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board<{}x{}>:\n{}", self.dimension, self.dimension, self)
    }
}
