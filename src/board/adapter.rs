//! The narrow board interface the rules engine consumes.
//!
//! Movement geometry, the legality filter and evaluation never touch board
//! storage directly; they are generic over any `BoardAdapter`, so test fixtures
//! and lookahead copies can stand in for the game board.

use super::{Cell, Color, Piece, PieceId};

pub trait BoardAdapter {
    /// Look up a piece record by handle.
    fn piece(&self, id: PieceId) -> Option<&Piece>;

    /// The piece standing on `cell`. Off-board cells are always empty.
    fn occupant(&self, cell: Cell) -> Option<PieceId>;

    /// Place `occupant` on `cell`, or clear the cell with `None`.
    ///
    /// Placing a piece updates its tracked cell and vacates the cell it stood on
    /// before. A piece displaced from `cell` is taken out of play (its tracked
    /// cell becomes `None`). Clearing leaves the former occupant's tracked cell
    /// untouched.
    fn set_occupant(&mut self, cell: Cell, occupant: Option<PieceId>);

    /// Whether `color`'s king is attacked in the current occupancy.
    fn is_king_in_check(&self, color: Color) -> bool;

    /// Handles of all pieces currently standing on the board.
    fn pieces_in_play(&self) -> Vec<PieceId>;

    #[inline]
    fn is_cell_on_board(&self, cell: Cell) -> bool {
        cell.is_on_board()
    }

    #[inline]
    fn is_empty_and_on_board(&self, cell: Cell) -> bool {
        self.is_cell_on_board(cell) && self.occupant(cell).is_none()
    }

    /// Color of the piece on `cell`, if any.
    fn occupant_color(&self, cell: Cell) -> Option<Color> {
        if !self.is_cell_on_board(cell) {
            return None;
        }
        self.occupant(cell)
            .and_then(|id| self.piece(id))
            .map(Piece::color)
    }

    /// On-board and either empty or held by an enemy of `mover`.
    fn is_enterable(&self, mover: PieceId, cell: Cell) -> bool {
        let Some(own) = self.piece(mover).map(Piece::color) else {
            return false;
        };
        self.is_cell_on_board(cell) && self.occupant_color(cell) != Some(own)
    }

    /// On-board and held by an enemy of `mover`.
    fn is_capturable(&self, mover: PieceId, cell: Cell) -> bool {
        let Some(own) = self.piece(mover).map(Piece::color) else {
            return false;
        };
        self.occupant_color(cell) == Some(own.opponent())
    }
}
