//! Static evaluation of a single piece, and the side-signed position sum.
//!
//! The per-piece score never looks at the piece's own color; the asymmetry
//! between sides comes only from [`evaluate_position`] adding White's scores and
//! subtracting Black's.

mod params;

pub use params::EvalParams;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{BoardAdapter, Kind, PieceId};

use super::legality::legal_cells;

/// Which terms the evaluation includes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvalMode {
    /// Base material only.
    Simple,
    /// Material, capture threats and centrality.
    #[default]
    Extended,
}

/// Score `piece` with the default [`EvalParams`].
pub fn evaluate<B: BoardAdapter + ?Sized>(board: &mut B, piece: PieceId, mode: EvalMode) -> f64 {
    evaluate_with(board, piece, mode, &EvalParams::default())
}

/// Score `piece` on `board`.
///
/// Simple mode returns the material value. Extended mode adds, for every legal
/// cell holding an enemy, `capture_fraction` of that enemy's capture value, then
/// scales non-king pieces by the centrality of their cell.
///
/// A handle that does not name a piece standing on this board scores 0.
pub fn evaluate_with<B: BoardAdapter + ?Sized>(
    board: &mut B,
    piece: PieceId,
    mode: EvalMode,
    params: &EvalParams,
) -> f64 {
    let Some(&record) = board.piece(piece) else {
        return 0.0;
    };
    let Some(cell) = record.cell().filter(|&c| board.occupant(c) == Some(piece)) else {
        return 0.0;
    };

    let mut score = params.material(record.kind());
    if mode == EvalMode::Simple {
        return score;
    }

    // Capture values are whole numbers, so summing them first keeps the total
    // independent of enumeration order.
    let mut threatened = 0.0;
    for target in legal_cells(board, piece) {
        if !board.is_capturable(piece, target) {
            continue;
        }
        if let Some(enemy) = board.occupant(target).and_then(|id| board.piece(id)) {
            threatened += params.capture_value(enemy.kind());
        }
    }
    score += params.capture_fraction * threatened;

    if record.kind() != Kind::King {
        score *= params.centrality(cell);
    }
    score
}

/// White's piece scores minus Black's.
pub fn evaluate_position<B: BoardAdapter + ?Sized>(board: &mut B, mode: EvalMode) -> f64 {
    evaluate_position_with(board, mode, &EvalParams::default())
}

pub fn evaluate_position_with<B: BoardAdapter + ?Sized>(
    board: &mut B,
    mode: EvalMode,
    params: &EvalParams,
) -> f64 {
    let mut pieces = board.pieces_in_play();
    pieces.sort();

    let mut total = 0.0;
    for id in pieces {
        let Some(color) = board.piece(id).map(|p| p.color()) else {
            continue;
        };
        total += color.sign() * evaluate_with(board, id, mode, params);
    }
    total
}
