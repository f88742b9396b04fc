//! Persistent board storage and the copy-on-write [`GameState`] aggregate.
//!
//! Everything here is a value: boards, node-state grids, and game states are
//! cloned cheaply (structural sharing via [`grid::Grid`]) and never mutated
//! in place. A state returned to a caller stays valid forever, which is what
//! lets strategies explore several candidate futures from one snapshot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod game;
pub mod grid;
pub mod problem;

pub use board::{Board, BoardCell, NodeState};
pub use game::{Backpack, GameState};
pub use grid::Grid;
pub use problem::{normalize_grid, parse_problem, render, ParseError, Problem};
