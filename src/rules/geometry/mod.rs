//! Movement geometry: raw reachable cells per piece kind, ignoring check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::board::{BoardAdapter, Cell, Color, Kind, PieceId};

use kings::KING_OFFSETS;
use knights::{leaper_cells, KNIGHT_OFFSETS};
use pawns::pawn_cells;
use sliders::{slider_cells, BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS};

/// How a kind moves. Adding a kind means adding one arm to [`movement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Color-dependent pushes plus diagonal captures.
    Pawn,
    /// Single jumps by fixed offsets, never blocked.
    Leaper(&'static [(i8, i8)]),
    /// Unbounded rays, stopped by the first occupied cell.
    Slider(&'static [(i8, i8)]),
}

#[must_use]
pub const fn movement(kind: Kind) -> Movement {
    match kind {
        Kind::Pawn => Movement::Pawn,
        Kind::Knight => Movement::Leaper(&KNIGHT_OFFSETS),
        Kind::King => Movement::Leaper(&KING_OFFSETS),
        Kind::Rook => Movement::Slider(&ROOK_RAYS),
        Kind::Bishop => Movement::Slider(&BISHOP_RAYS),
        Kind::Queen => Movement::Slider(&QUEEN_RAYS),
    }
}

/// Color, kind and cell of a piece that must be on the board.
///
/// # Panics
/// If the handle is unknown, the piece has no cell, or its tracked cell is
/// held by something else; asking a piece that is not in play for its moves
/// means setup or move commit is broken.
pub(crate) fn placed<B: BoardAdapter + ?Sized>(board: &B, id: PieceId) -> (Color, Kind, Cell) {
    let Some(piece) = board.piece(id) else {
        panic!("unknown piece handle {id:?}");
    };
    let Some(cell) = piece.cell() else {
        panic!("{id:?} ({:?} {:?}) has no cell", piece.color(), piece.kind());
    };
    if board.occupant(cell) != Some(id) {
        panic!(
            "{id:?} ({:?} {:?}) is not on the board at {cell}",
            piece.color(),
            piece.kind()
        );
    }
    (piece.color(), piece.kind(), cell)
}

/// Every cell the piece could move to by its movement pattern, considering
/// blockers but not check. Order follows the kind's fixed enumeration.
///
/// # Panics
/// If the piece is not placed on the board.
pub fn reachable_cells<B: BoardAdapter + ?Sized>(board: &B, piece: PieceId) -> Vec<Cell> {
    let (color, kind, from) = placed(board, piece);
    let mut cells = Vec::with_capacity(28);

    match movement(kind) {
        Movement::Pawn => pawn_cells(board, piece, from, color, &mut cells),
        Movement::Leaper(offsets) => leaper_cells(board, piece, from, offsets, &mut cells),
        Movement::Slider(rays) => slider_cells(board, piece, from, rays, &mut cells),
    }

    cells
}
