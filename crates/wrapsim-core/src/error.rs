//! Error taxonomy shared by the state, engine, and navigation crates.
//!
//! Two kinds of failure exist at runtime: out-of-board access
//! ([`BoundsError`]) and illegal actions ([`LogicError`]). Both are fatal to
//! the failing call and signal a caller defect; the engine never retries and
//! never partially applies — inputs are immutable, so "state unchanged on
//! error" holds by construction.

use crate::booster::Booster;
use crate::point::Point;
use crate::robot::RobotId;
use std::error::Error;
use std::fmt;

/// A point outside `[0, width) x [0, height)` was used to address the board.
///
/// Out-of-board access is never clamped or wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsError {
    /// The offending point.
    pub point: Point,
    /// Board width in cells.
    pub width: i32,
    /// Board height in cells.
    pub height: i32,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "point {} outside board [0, {}) x [0, {})",
            self.point, self.width, self.height
        )
    }
}

impl Error for BoundsError {}

/// An action violated one of the engine's preconditions.
///
/// Reaching any of these means the caller skipped the legality check (or the
/// legality layer has diverged from the engine, which is a defect here).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicError {
    /// A booster was consumed with an inventory count of zero.
    BoosterUnavailable(Booster),
    /// A move's first sub-step entered a wall or left the board.
    MoveBlocked {
        /// The robot attempting the move.
        robot: RobotId,
        /// Where it stood.
        from: Point,
        /// The blocked destination.
        to: Point,
    },
    /// A robot stands on an obstacle cell without an active drill.
    DrillRequired(Point),
    /// `CloneRobot` was issued off a cloning location.
    NotOnCloneLocation(Point),
    /// The referenced robot does not exist in this state.
    UnknownRobot(RobotId),
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoosterUnavailable(b) => {
                write!(f, "no unused {b} in inventory")
            }
            Self::MoveBlocked { robot, from, to } => {
                write!(f, "{robot} cannot move from {from} into {to}")
            }
            Self::DrillRequired(p) => {
                write!(f, "obstacle at {p} entered without an active drill")
            }
            Self::NotOnCloneLocation(p) => {
                write!(f, "cannot clone at {p}: not a cloning location")
            }
            Self::UnknownRobot(id) => write!(f, "{id} does not exist"),
        }
    }
}

impl Error for LogicError {}

/// Any failure the engine can report from `apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Out-of-board access.
    Bounds(BoundsError),
    /// Illegal action.
    Logic(LogicError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(e) => write!(f, "bounds error: {e}"),
            Self::Logic(e) => write!(f, "logic error: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bounds(e) => Some(e),
            Self::Logic(e) => Some(e),
        }
    }
}

impl From<BoundsError> for EngineError {
    fn from(e: BoundsError) -> Self {
        Self::Bounds(e)
    }
}

impl From<LogicError> for EngineError {
    fn from(e: LogicError) -> Self {
        Self::Logic(e)
    }
}
