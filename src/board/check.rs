//! Check detection with a position-keyed cache.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;

use crate::rules::reachable_cells;

use super::{Board, BoardAdapter, Color};

/// Entries kept before the cache is flushed.
const CHECK_CACHE_CAPACITY: usize = 1 << 16;

/// Check status memoized by (occupancy hash, color).
///
/// The legality filter probes the same few positions over and over while it
/// simulates candidates, so most queries are hits.
pub(crate) struct CheckCache {
    entries: Mutex<HashMap<(u64, Color), bool>>,
}

impl CheckCache {
    pub(crate) fn new() -> Self {
        CheckCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn get_or_compute(
        &self,
        hash: u64,
        color: Color,
        compute: impl FnOnce() -> bool,
    ) -> bool {
        let cached = self.entries.lock().get(&(hash, color)).copied();
        if let Some(hit) = cached {
            return hit;
        }

        trace_log!("check cache miss for {color} at {hash:#018x}");
        let in_check = compute();

        let mut entries = self.entries.lock();
        if entries.len() >= CHECK_CACHE_CAPACITY {
            entries.clear();
        }
        entries.insert((hash, color), in_check);
        in_check
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Clone for CheckCache {
    fn clone(&self) -> Self {
        CheckCache {
            entries: Mutex::new(self.entries.lock().clone()),
        }
    }
}

impl fmt::Debug for CheckCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckCache")
            .field("entries", &self.len())
            .finish()
    }
}

impl Board {
    /// Recompute check status without consulting the cache.
    ///
    /// The king is in check when any enemy piece's reachable set contains its
    /// cell. A board without a king of `color` is never in check.
    pub fn compute_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            warn_log!("no {color} king on the board, reporting no check");
            return false;
        };

        self.pieces_in_play()
            .into_iter()
            .filter(|&id| self.pieces[id.index()].color() != color)
            .any(|id| reachable_cells(self, id).contains(&king))
    }

    /// Drop all memoized check results.
    pub fn clear_check_cache(&self) {
        self.check_cache.clear();
    }

    pub fn check_cache_len(&self) -> usize {
        self.check_cache.len()
    }
}
