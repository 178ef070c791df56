//! Board representation and the adapter interface the rules engine consumes.
//!
//! `Board` is a mailbox reference implementation of [`BoardAdapter`] with
//! Zobrist-keyed check caching. The rules in [`crate::rules`] accept any
//! adapter, so hosts with their own board storage only implement the trait.
//!
//! # Example
//! ```
//! use piece_rules::board::{Board, BoardAdapter, Cell, Color};
//!
//! let board = Board::new();
//! assert!(!board.is_king_in_check(Color::White));
//! assert!(board.is_empty_and_on_board(Cell(3, 3)));
//! ```

mod adapter;
mod builder;
mod check;
mod display;
mod error;
mod moves;
mod placement;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use adapter::BoardAdapter;
pub use builder::BoardBuilder;
pub use error::{BoardError, CellError};
pub use state::Board;
pub use types::{Cell, Color, Kind, Piece, PieceId};
