//! Rules tests.
//!
//! - `geometry.rs` - reachable cells per kind
//! - `legality.rs` - check filtering and board restoration
//! - `eval.rs` - simple and extended evaluation
//! - `proptest.rs` - subset, restoration and color-symmetry properties


use rand::prelude::*;

use crate::board::{Board, BoardAdapter, Cell, Color, Kind, PieceId};

/// Board with `piece` alone on it, returning the board and handle.
fn lone(color: Color, kind: Kind, cell: Cell) -> (Board, PieceId) {
    let mut board = Board::empty();
    let id = board.place(color, kind, cell);
    (board, id)
}

fn sorted(mut cells: Vec<Cell>) -> Vec<Cell> {
    cells.sort();
    cells
}

/// Random position with one king per side plus `extra` random non-king pieces.
/// Pawns never land on a back rank.
fn random_position(seed: u64, extra: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cells: Vec<Cell> = Cell::all().collect();
    cells.shuffle(&mut rng);
    let mut cells = cells.into_iter();

    let mut board = Board::empty();
    for color in Color::BOTH {
        if let Some(cell) = cells.next() {
            board.place(color, Kind::King, cell);
        }
    }
    for cell in cells.take(extra) {
        let color = if rng.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let kind = Kind::ALL[rng.gen_range(0..5)];
        let kind = if kind == Kind::Pawn && (cell.row() == 0 || cell.row() == 7) {
            Kind::Knight
        } else {
            kind
        };
        board.place(color, kind, cell);
    }
    board
}

/// The same position with colors swapped and rows mirrored. Handles line up
/// with the source board.
fn mirrored(board: &Board) -> Board {
    let mut mirror = Board::empty();
    for piece in &board.pieces {
        let id = mirror.add_piece(piece.color().opponent(), piece.kind());
        if let Some(cell) = piece.cell() {
            if board.grid[cell.row() as usize][cell.col() as usize] == Some(id) {
                mirror.set_occupant(cell.flip_vertical(), Some(id));
            }
        }
    }
    mirror
}
