#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Cell, Kind};

/// Tunables of the extended evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalParams {
    /// Base material per kind, indexed Pawn, Knight, Bishop, Rook, Queen, King.
    pub material: [f64; 6],
    /// What an attackable enemy king is worth to the capture term.
    pub king_capture_value: f64,
    /// Share of a target's capture value credited per attackable enemy.
    pub capture_fraction: f64,
    /// Centrality multiplier by ring, edge (0) to centre (3).
    pub centrality: [f64; 4],
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            material: Kind::ALL.map(Kind::material),
            king_capture_value: 12.0,
            capture_fraction: 0.1,
            centrality: [0.91, 0.94, 0.97, 1.0],
        }
    }
}

impl EvalParams {
    #[inline]
    #[must_use]
    pub fn material(&self, kind: Kind) -> f64 {
        self.material[kind.index()]
    }

    /// Capture value of a target: its material, except the king's fixed value.
    #[inline]
    #[must_use]
    pub fn capture_value(&self, kind: Kind) -> f64 {
        match kind {
            Kind::King => self.king_capture_value,
            _ => self.material(kind),
        }
    }

    /// Multiplier for the ring `cell` sits on. A row or column on the edge puts
    /// the cell on ring 0; only the central 2x2 reaches ring 3.
    #[must_use]
    pub fn centrality(&self, cell: Cell) -> f64 {
        self.centrality[ring(cell)]
    }
}

/// Distance in cells from the nearest edge, clamped to 0..=3.
fn ring(cell: Cell) -> usize {
    let row = cell.row().min(7 - cell.row());
    let col = cell.col().min(7 - cell.col());
    row.min(col).clamp(0, 3) as usize
}
