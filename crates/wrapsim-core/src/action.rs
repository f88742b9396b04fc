//! The closed action set and its canonical solution encoding.

use crate::point::Point;
use std::fmt;

/// A cardinal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Move one cell up (+y). Encoded `W`.
    Up,
    /// Move one cell down (-y). Encoded `S`.
    Down,
    /// Move one cell left (-x). Encoded `A`.
    Left,
    /// Move one cell right (+x). Encoded `D`.
    Right,
}

/// One robot action, applied atomically by the engine.
///
/// The set is closed; every consumer matches exhaustively so adding a
/// variant is a compile error everywhere it matters.
///
/// # Examples
///
/// ```
/// use wrapsim_core::{Action, Movement, Point};
///
/// assert_eq!(Action::Move(Movement::Up).encode(), "W");
/// assert_eq!(Action::AttachManipulator(Point::new(2, 0)).encode(), "B(2,0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// No effect beyond the implicit booster pickup.
    DoNothing,
    /// Step one cell (two with active fast wheels) in a direction.
    Move(Movement),
    /// Rotate the robot and its arms 90° clockwise.
    TurnClockwise,
    /// Rotate the robot and its arms 90° counter-clockwise.
    TurnCounterClockwise,
    /// Attach an extra manipulator arm at the given relative offset.
    AttachManipulator(Point),
    /// Activate fast wheels for 50 turns.
    AttachFastWheels,
    /// Activate the drill for 30 turns.
    StartDrill,
    /// Plant a teleport reset point on the current cell.
    PlantTeleportResetPoint,
    /// Jump back to a previously planted reset point.
    TeleportBack(Point),
    /// Spawn a new robot on the current cloning location.
    CloneRobot,
}

impl Action {
    /// The canonical one-record solution encoding for this action.
    pub fn encode(&self) -> String {
        match self {
            Action::Move(Movement::Up) => "W".to_owned(),
            Action::Move(Movement::Down) => "S".to_owned(),
            Action::Move(Movement::Left) => "A".to_owned(),
            Action::Move(Movement::Right) => "D".to_owned(),
            Action::DoNothing => "Z".to_owned(),
            Action::TurnClockwise => "E".to_owned(),
            Action::TurnCounterClockwise => "Q".to_owned(),
            Action::AttachFastWheels => "F".to_owned(),
            Action::StartDrill => "L".to_owned(),
            Action::PlantTeleportResetPoint => "R".to_owned(),
            Action::CloneRobot => "C".to_owned(),
            Action::AttachManipulator(p) => format!("B({},{})", p.x, p.y),
            Action::TeleportBack(p) => format!("T({},{})", p.x, p.y),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Encode one robot's action history in issuance order.
pub fn encode_actions(actions: &[Action]) -> String {
    actions.iter().map(Action::encode).collect()
}

/// Encode a full solution: one concatenated record per robot, robots
/// separated by `#` in robot-id order.
pub fn encode_solution(per_robot: &[Vec<Action>]) -> String {
    per_robot
        .iter()
        .map(|actions| encode_actions(actions))
        .collect::<Vec<_>>()
        .join("#")
}
