//! Core value types.
//!
//! - `Cell` - (row, col) coordinate, possibly off-board
//! - `Kind` and `Color` - piece kinds and colors
//! - `Piece` and `PieceId` - a piece record and its arena handle

mod cell;
mod piece;

pub use cell::Cell;
pub use piece::{Color, Kind, Piece, PieceId};
