//! Legality filter: drop reachable cells that leave the mover's king in check.

use crate::board::{BoardAdapter, Cell, Color, PieceId};

use super::geometry::{placed, reachable_cells};

/// A candidate move applied to the board for the lifetime of the value.
///
/// Dropping it puts the mover back on its origin and the displaced occupant
/// (if any) back on the target, so the board is restored on every exit path.
struct Simulation<'a, B: BoardAdapter + ?Sized> {
    board: &'a mut B,
    mover: PieceId,
    origin: Cell,
    target: Cell,
    displaced: Option<PieceId>,
}

impl<'a, B: BoardAdapter + ?Sized> Simulation<'a, B> {
    fn begin(board: &'a mut B, mover: PieceId, origin: Cell, target: Cell) -> Self {
        let displaced = board.occupant(target);
        board.set_occupant(target, Some(mover));
        Simulation {
            board,
            mover,
            origin,
            target,
            displaced,
        }
    }

    fn board(&self) -> &B {
        &*self.board
    }
}

impl<B: BoardAdapter + ?Sized> Drop for Simulation<'_, B> {
    fn drop(&mut self) {
        self.board.set_occupant(self.origin, Some(self.mover));
        self.board.set_occupant(self.target, self.displaced);
    }
}

/// Reachable cells after which the mover's own king is not in check.
///
/// Each candidate is played on the board, the cached check status queried and
/// the board restored before the next candidate; on return the board is
/// identical to before the call. An empty result means the piece has no legal
/// move.
///
/// # Panics
/// If the piece is not placed on the board.
pub fn legal_cells<B: BoardAdapter + ?Sized>(board: &mut B, piece: PieceId) -> Vec<Cell> {
    let (color, _, origin) = placed(board, piece);
    let candidates = reachable_cells(board, piece);
    let mut legal = Vec::with_capacity(candidates.len());

    for target in candidates {
        let simulation = Simulation::begin(board, piece, origin, target);
        if simulation.board().is_king_in_check(color) {
            trace_log!("{origin} -> {target} leaves the {color} king in check");
        } else {
            legal.push(target);
        }
    }

    legal
}

/// Every legal move of `color`, grouped by piece in handle order.
pub fn legal_moves<B: BoardAdapter + ?Sized>(
    board: &mut B,
    color: Color,
) -> Vec<(PieceId, Cell)> {
    let mut movers = board.pieces_in_play();
    movers.sort();

    let mut moves = Vec::new();
    for id in movers {
        if board.piece(id).map(|p| p.color()) != Some(color) {
            continue;
        }
        moves.extend(legal_cells(board, id).into_iter().map(|cell| (id, cell)));
    }
    moves
}
