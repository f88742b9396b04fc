//! Core types for the wrapsim grid-wrapping engine.
//!
//! The leaf crate of the workspace: grid points and orientations, the
//! closed [`Booster`] and [`Action`] sets, robot identity and per-robot
//! state, generation ids for cache keying, and the error taxonomy shared by
//! the engine and navigation crates. Nothing here depends on the board
//! representation or the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod booster;
pub mod error;
pub mod id;
pub mod orientation;
pub mod point;
pub mod robot;

pub use action::{encode_actions, encode_solution, Action, Movement};
pub use booster::Booster;
pub use error::{BoundsError, EngineError, LogicError};
pub use id::{BoardGenerationId, StateGenerationId};
pub use orientation::Orientation;
pub use point::Point;
pub use robot::{MovementSpeed, RobotId, RobotState};
