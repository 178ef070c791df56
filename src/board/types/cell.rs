//! Cell coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CellError;

/// A cell on the board, represented as (row, col).
///
/// Row 0 is White's back rank, column 0 is the a-file. Coordinates are signed
/// so geometry can step past the edge; such cells report `is_on_board() == false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(pub i8, pub i8); // (row, col)

impl Cell {
    /// Create a cell with bounds checking
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Option<Self> {
        let cell = Cell(row, col);
        if cell.is_on_board() {
            Some(cell)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 >= 0 && self.0 < 8 && self.1 >= 0 && self.1 < 8
    }

    /// Step by (dr, dc). The result may be off-board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Cell(self.0.wrapping_add(dr), self.1.wrapping_add(dc))
    }

    /// Flip the cell vertically (row r <-> row 7 - r)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Cell(7_i8.wrapping_sub(self.0), self.1)
    }

    /// Index 0-63 (a1=0, b1=1, ..., h8=63), `None` when off-board
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.0 as usize * 8 + self.1 as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Cell::index`]; `idx` must be below 64.
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64, "cell index out of range");
        Cell((idx / 8) as i8, (idx % 8) as i8)
    }

    /// Every on-board cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..64).map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl TryFrom<(i8, i8)> for Cell {
    type Error = CellError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        if !(0..8).contains(&row) {
            return Err(CellError::RowOutOfBounds { row });
        }
        if !(0..8).contains(&col) {
            return Err(CellError::ColOutOfBounds { col });
        }
        Ok(Cell(row, col))
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CellError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as i8,
            _ => return Err(invalid()),
        };

        Ok(Cell(row, col))
    }
}
