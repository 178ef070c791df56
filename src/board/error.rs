//! Error types for board setup and move commit.

use std::fmt;

use super::Cell;

/// Error type for board operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Invalid piece letter in a placement string
    InvalidPiece { char: char },
    /// Placement string does not describe exactly 8 ranks
    InvalidRankCount { found: usize },
    /// A rank in a placement string does not cover exactly 8 files
    InvalidFileCount { rank: usize, files: usize },
    /// Cell lies outside the board
    OffBoard { cell: Cell },
    /// No piece stands on the cell
    EmptyCell { cell: Cell },
    /// Target is not a legal cell for the piece on `from`
    IllegalMove { from: Cell, to: Cell },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            BoardError::InvalidRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            BoardError::InvalidFileCount { rank, files } => {
                write!(f, "Rank {rank} covers {files} files, expected 8")
            }
            BoardError::OffBoard { cell } => write!(f, "Cell {cell} is off the board"),
            BoardError::EmptyCell { cell } => write!(f, "No piece on {cell}"),
            BoardError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for cell parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: i8 },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            CellError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            CellError::InvalidNotation { notation } => {
                write!(f, "Invalid cell notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CellError {}
