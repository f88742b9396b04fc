//! Non-mutating legality checks and action enumeration.
//!
//! Mirrors [`apply`](crate::apply)'s preconditions exactly: an action this
//! module calls legal will not fail in `apply` for that state, and vice
//! versa. Strategies query here before committing to a branch.

use wrapsim_core::{Action, Booster, Movement, RobotId};
use wrapsim_state::GameState;

/// Whether `robot_id` may perform `action` in `state`.
///
/// Any action for an unknown robot is illegal.
pub fn is_legal(state: &GameState, robot_id: RobotId, action: &Action) -> bool {
    let Ok(robot) = state.robot(robot_id) else {
        return false;
    };
    match action {
        Action::DoNothing | Action::TurnClockwise | Action::TurnCounterClockwise => true,

        Action::Move(movement) => {
            let to = robot.position.step(*movement);
            match state.get(to) {
                Err(_) => false,
                Ok(cell) => !cell.is_obstacle || robot.has_active_drill(),
            }
        }

        Action::AttachManipulator(_) => state.backpack_contains(Booster::ExtraArm),
        Action::AttachFastWheels => state.backpack_contains(Booster::FastWheels),
        Action::StartDrill => state.backpack_contains(Booster::Drill),
        Action::PlantTeleportResetPoint => state.backpack_contains(Booster::Teleporter),

        Action::TeleportBack(target) => state.is_teleport_target(*target),

        Action::CloneRobot => {
            state.backpack_contains(Booster::CloneToken)
                && state
                    .node_state(robot.position)
                    .map(|n| n.booster == Some(Booster::CloningLocation))
                    .unwrap_or(false)
        }
    }
}

/// All actions `robot_id` may perform in `state`, in a fixed order.
///
/// `AttachManipulator` is excluded: its offset parameter is unbounded, so
/// enumeration would be open-ended. Strategies that want an arm propose one
/// explicitly and check it with [`is_legal`].
pub fn legal_actions(state: &GameState, robot_id: RobotId) -> Vec<Action> {
    let mut candidates = vec![
        Action::DoNothing,
        Action::TurnClockwise,
        Action::TurnCounterClockwise,
        Action::Move(Movement::Left),
        Action::Move(Movement::Right),
        Action::Move(Movement::Down),
        Action::Move(Movement::Up),
    ];
    candidates.extend(state.teleport_targets().map(Action::TeleportBack));
    candidates.extend([
        Action::CloneRobot,
        Action::AttachFastWheels,
        Action::StartDrill,
        Action::PlantTeleportResetPoint,
    ]);
    candidates
        .into_iter()
        .filter(|action| is_legal(state, robot_id, action))
        .collect()
}
