//! Zobrist hashing for board occupancy.
//!
//! Provides incrementally-updatable 64-bit hashes used to key the check cache.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Cell, Color, Kind};

pub(crate) struct ZobristKeys {
    // piece_keys[kind][color][cell_index]
    piece_keys: [[[u64; 64]; 2]; 6],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 6];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys { piece_keys }
    }

    /// Key for a piece standing on a cell; off-board cells hash to 0.
    #[inline]
    pub(crate) fn piece_key(&self, color: Color, kind: Kind, cell: Cell) -> u64 {
        match cell.index() {
            Some(idx) => self.piece_keys[kind.index()][color.index()][idx],
            None => 0,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
