//! Robot identity and per-robot state.

use crate::orientation::Orientation;
use crate::point::Point;
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Identifies one robot within a game.
///
/// Ids are totally ordered; turn processing visits robots in ascending id
/// order and cloning mints `max(existing).next()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RobotId(pub u32);

impl RobotId {
    /// The id of the robot present at game start.
    pub const FIRST: RobotId = RobotId(0);

    /// The successor id, used when minting clone ids.
    pub const fn next(self) -> RobotId {
        RobotId(self.0 + 1)
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "robot{}", self.0)
    }
}

/// Movement distance class, derived from the fast-wheels timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementSpeed {
    /// One cell per move action.
    Normal,
    /// Two cells per move action (fast wheels active).
    Fast,
}

/// Arm offsets inline up to the default shape plus a few extensions.
pub type ArmOffsets = SmallVec<[Point; 8]>;

/// Mutable-per-action state of one robot.
///
/// Arm offsets are relative to the robot's position; their insertion order
/// is preserved (rotation maps each offset in place) but wrapping does not
/// depend on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotState {
    /// This robot's id.
    pub id: RobotId,
    /// Current board position.
    pub position: Point,
    /// Current facing.
    pub orientation: Orientation,
    /// Remaining fast-wheels turns; active while `> 1`.
    pub fast_wheels_ticks: i32,
    /// Remaining drill turns; active while `> 1`.
    pub drill_ticks: i32,
    /// Manipulator arm offsets from the robot's cell.
    pub arms: ArmOffsets,
}

impl RobotState {
    /// Create a robot at `position` with the default arm shape: the
    /// three-cell column one step to the right.
    pub fn new(id: RobotId, position: Point) -> Self {
        Self {
            id,
            position,
            orientation: Orientation::default(),
            fast_wheels_ticks: 0,
            drill_ticks: 0,
            arms: smallvec![Point::new(1, 0), Point::new(1, 1), Point::new(1, -1)],
        }
    }

    /// Whether fast wheels still apply to the next move.
    pub const fn has_active_fast_wheels(&self) -> bool {
        self.fast_wheels_ticks > 1
    }

    /// Whether the drill still applies to the next move.
    pub const fn has_active_drill(&self) -> bool {
        self.drill_ticks > 1
    }

    /// Current movement distance class.
    pub const fn speed(&self) -> MovementSpeed {
        if self.has_active_fast_wheels() {
            MovementSpeed::Fast
        } else {
            MovementSpeed::Normal
        }
    }

    /// Arm offsets after a 90° clockwise turn.
    pub fn turned_clockwise(&self) -> ArmOffsets {
        self.arms.iter().map(|p| p.rotate_cw()).collect()
    }

    /// Arm offsets after a 90° counter-clockwise turn.
    pub fn turned_counter_clockwise(&self) -> ArmOffsets {
        self.arms.iter().map(|p| p.rotate_ccw()).collect()
    }

    /// This robot with an extra arm offset appended.
    pub fn with_arm(&self, offset: Point) -> Self {
        let mut next = self.clone();
        next.arms.push(offset);
        next
    }

    /// This robot relocated to `position`.
    pub fn at(&self, position: Point) -> Self {
        let mut next = self.clone();
        next.position = position;
        next
    }
}
