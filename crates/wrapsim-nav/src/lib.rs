//! Board graphs and weighted shortest paths.
//!
//! [`BoardGraph`] turns a structural board into an adjacency list over its
//! non-obstacle cells, with a separate edge set per [`MovementSpeed`].
//! [`dijkstra`] and [`floyd_warshall`] answer single-source and all-pairs
//! distance queries against a game state's dynamic cell classes, weighted by
//! a [`WeightPolicy`]. Graphs and path results are immutable once built;
//! [`GraphCache`] and [`PathCache`] memoize them under generation-id keys, so
//! a cached value can never be served against a mutated board or state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod graph;
pub mod path;
pub mod weight;

pub use cache::{BoundedCache, GraphCache, PathCache, DEFAULT_CACHE_CAPACITY};
pub use graph::BoardGraph;
pub use path::{dijkstra, floyd_warshall, AllPairs, NavError, ShortestPaths};
pub use weight::WeightPolicy;
