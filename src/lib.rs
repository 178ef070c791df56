#[macro_use]
mod macros;

pub mod board;
pub mod rules;
mod zobrist;

pub use board::{Board, BoardAdapter, Cell, Color, Kind, Piece, PieceId};
pub use rules::{evaluate, legal_cells, reachable_cells, EvalMode};
