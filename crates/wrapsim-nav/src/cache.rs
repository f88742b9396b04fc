//! Generation-keyed memoization for graphs and path runs.

use crate::graph::BoardGraph;
use crate::path::{dijkstra, NavError, ShortestPaths};
use crate::weight::WeightPolicy;
use indexmap::IndexMap;
use std::hash::Hash;
use std::sync::Arc;
use wrapsim_core::{BoardGenerationId, MovementSpeed, Point, StateGenerationId};
use wrapsim_state::{Board, GameState};

/// Default entry capacity for [`GraphCache`] and [`PathCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// A bounded map with least-recently-used eviction.
///
/// Entries live in an `IndexMap` in recency order, oldest first: a hit moves
/// the entry to the back, an insert at capacity evicts the front.
#[derive(Clone, Debug)]
pub struct BoundedCache<K, V> {
    entries: IndexMap<K, V>,
    capacity: usize,
}

impl<K: Hash + Eq, V> BoundedCache<K, V> {
    /// An empty cache holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, refreshing its recency on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let index = self.entries.get_index_of(key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        self.entries.get(key)
    }

    /// Insert or replace `key`, evicting the least-recently-used entry when
    /// full.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(index) = self.entries.get_index_of(&key) {
            self.entries[index] = value;
            let last = self.entries.len() - 1;
            self.entries.move_index(index, last);
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, value);
    }
}

impl<K: Hash + Eq, V> Default for BoundedCache<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// Memoized adjacency graphs, keyed by board generation and speed.
///
/// A mutated board carries a fresh generation id, so a stale graph can never
/// be served; it simply ages out.
#[derive(Clone, Debug, Default)]
pub struct GraphCache {
    cache: BoundedCache<(BoardGenerationId, MovementSpeed), Arc<BoardGraph>>,
}

impl GraphCache {
    /// An empty cache with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// The graph for `board` under `speed`, building it on a miss.
    pub fn graph(&mut self, board: &Board, speed: MovementSpeed) -> Arc<BoardGraph> {
        let key = (board.generation(), speed);
        if let Some(graph) = self.cache.get(&key) {
            return Arc::clone(graph);
        }
        let built = Arc::new(BoardGraph::build(board, speed));
        self.cache.insert(key, Arc::clone(&built));
        built
    }

    /// Number of cached graphs.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no graph is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

type PathKey = (
    BoardGenerationId,
    StateGenerationId,
    MovementSpeed,
    Point,
);

/// Memoized single-source path runs, keyed by board and state generation,
/// speed, and source point.
///
/// One cache assumes one [`WeightPolicy`]; callers juggling several policies
/// keep a cache per policy.
#[derive(Clone, Debug, Default)]
pub struct PathCache {
    cache: BoundedCache<PathKey, Arc<ShortestPaths>>,
}

impl PathCache {
    /// An empty cache with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// The path run from `source` in `state` under `speed`, computing it on
    /// a miss via `graphs`.
    pub fn paths(
        &mut self,
        graphs: &mut GraphCache,
        state: &GameState,
        policy: &WeightPolicy,
        speed: MovementSpeed,
        source: Point,
    ) -> Result<Arc<ShortestPaths>, NavError> {
        let key = (
            state.board().generation(),
            state.state_generation(),
            speed,
            source,
        );
        if let Some(paths) = self.cache.get(&key) {
            return Ok(Arc::clone(paths));
        }
        let graph = graphs.graph(state.board(), speed);
        let computed = Arc::new(dijkstra(graph, state, policy, source)?);
        self.cache.insert(key, Arc::clone(&computed));
        Ok(computed)
    }

    /// Number of cached runs.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no run is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapsim_state::{parse_problem, NodeState};

    #[test]
    fn full_caches_evict_the_least_recently_used() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        // Touch "a" so "b" is now the oldest.
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.insert("c", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn reinserting_replaces_and_refreshes() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);
        cache.insert("c", 3);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut cache = BoundedCache::new(0);
        cache.insert("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.insert("b", 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn graph_cache_reuses_the_same_board() {
        let state =
            GameState::from_problem(&parse_problem("t", "@..").unwrap());
        let mut graphs = GraphCache::new();
        let a = graphs.graph(state.board(), MovementSpeed::Normal);
        let b = graphs.graph(state.board(), MovementSpeed::Normal);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(graphs.len(), 1);
        // A different speed is a different entry.
        let fast = graphs.graph(state.board(), MovementSpeed::Fast);
        assert!(!Arc::ptr_eq(&a, &fast));
        assert_eq!(graphs.len(), 2);
    }

    #[test]
    fn path_cache_misses_after_a_state_mutation() {
        let state =
            GameState::from_problem(&parse_problem("t", "@..").unwrap());
        let mut graphs = GraphCache::new();
        let mut paths = PathCache::new();
        let policy = WeightPolicy::default();

        let a = paths
            .paths(&mut graphs, &state, &policy, MovementSpeed::Normal, Point::ORIGIN)
            .unwrap();
        let b = paths
            .paths(&mut graphs, &state, &policy, MovementSpeed::Normal, Point::ORIGIN)
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(paths.len(), 1);

        let wrapped = state
            .update_state(
                Point::new(1, 0),
                NodeState {
                    is_wrapped: true,
                    booster: None,
                },
            )
            .unwrap();
        let c = paths
            .paths(&mut graphs, &wrapped, &policy, MovementSpeed::Normal, Point::ORIGIN)
            .unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(paths.len(), 2);
        // The graph itself was reusable: the board never changed.
        assert_eq!(graphs.len(), 1);
    }
}
