//! Generation ids for snapshot identity.
//!
//! Boards and node-state grids are persistent values; caches key derived
//! artifacts (adjacency graphs, shortest-path tables) by generation id
//! instead of deep equality. Ids come from process-wide atomic counters, so
//! two distinct mutation lineages can never reuse an id — a stale cache hit
//! is impossible even after a board is dropped.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static BOARD_GENERATION_COUNTER: AtomicU64 = AtomicU64::new(1);
static STATE_GENERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of one structural board value.
///
/// A fresh id is taken whenever a board cell changes (drilling, planting);
/// unchanged clones share the id, so equal ids imply equal boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardGenerationId(u64);

impl BoardGenerationId {
    /// Allocate a fresh, process-unique id. Thread-safe.
    pub fn next() -> Self {
        Self(BOARD_GENERATION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BoardGenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one node-state grid value (wrapped flags and boosters).
///
/// Same allocation discipline as [`BoardGenerationId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateGenerationId(u64);

impl StateGenerationId {
    /// Allocate a fresh, process-unique id. Thread-safe.
    pub fn next() -> Self {
        Self(STATE_GENERATION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StateGenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
