//! Piece movement, legality and evaluation.
//!
//! Data flows one way: the board adapter feeds [`reachable_cells`], whose output
//! [`legal_cells`] narrows by simulating each move, whose output [`evaluate`]
//! scores. Every function takes the board as an explicit argument.
//!
//! # Example
//! ```
//! use piece_rules::board::{Board, BoardAdapter, Cell};
//! use piece_rules::rules::{evaluate, legal_cells, reachable_cells, EvalMode};
//!
//! let mut board = Board::new();
//! let knight = board.occupant(Cell(0, 1)).unwrap();
//! assert_eq!(reachable_cells(&board, knight).len(), 2);
//! assert_eq!(legal_cells(&mut board, knight).len(), 2);
//! assert_eq!(evaluate(&mut board, knight, EvalMode::Simple), 3.0);
//! ```

mod eval;
mod geometry;
mod legality;

#[cfg(test)]
mod tests;

pub use eval::{
    evaluate, evaluate_position, evaluate_position_with, evaluate_with, EvalMode, EvalParams,
};
pub use geometry::{movement, reachable_cells, Movement};
pub use legality::{legal_cells, legal_moves};
