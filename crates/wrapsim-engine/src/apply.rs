//! The `apply` state-transition function.

use crate::wrap::wrap_affected_cells;
use wrapsim_core::{
    Action, Booster, EngineError, LogicError, Movement, Point, RobotId, RobotState,
};
use wrapsim_state::{BoardCell, GameState, NodeState};

/// Fast-wheel turns granted per `AttachFastWheels`.
const FAST_WHEELS_TURNS: i32 = 50;
/// Drill turns granted per `StartDrill`.
const DRILL_TURNS: i32 = 30;

/// Perform the initial wrap of a freshly constructed state: the first
/// robot's cell and whatever its default arms can see.
pub fn initialize(state: &GameState) -> Result<GameState, EngineError> {
    wrap_affected_cells(state, RobotId::FIRST)
}

/// Apply one action for one robot, returning the successor state.
///
/// Every call first performs the implicit pickup: a pickable booster on the
/// robot's current cell moves into the shared inventory before the action's
/// own effect. Callers are expected to pre-filter actions through
/// [`crate::legality`]; a violated precondition is reported as a
/// [`LogicError`], out-of-board access as a
/// [`BoundsError`](wrapsim_core::BoundsError).
///
/// The input state is never touched — on error it remains the current
/// state, on success it remains a valid snapshot of the past.
pub fn apply(
    state: &GameState,
    robot_id: RobotId,
    action: &Action,
) -> Result<GameState, EngineError> {
    let state = pickup_booster_if_available(state, robot_id)?;
    let position = state.robot(robot_id)?.position;

    match action {
        Action::DoNothing => Ok(state),

        Action::Move(movement) => apply_move(&state, robot_id, *movement),

        Action::TurnClockwise => {
            let robot = state.robot(robot_id)?;
            let turned = RobotState {
                orientation: robot.orientation.turn_clockwise(),
                arms: robot.turned_clockwise(),
                ..robot.clone()
            };
            wrap_affected_cells(&state.with_robot_state(turned), robot_id)
        }

        Action::TurnCounterClockwise => {
            let robot = state.robot(robot_id)?;
            let turned = RobotState {
                orientation: robot.orientation.turn_counter_clockwise(),
                arms: robot.turned_counter_clockwise(),
                ..robot.clone()
            };
            wrap_affected_cells(&state.with_robot_state(turned), robot_id)
        }

        Action::AttachFastWheels => {
            let robot = state.robot(robot_id)?;
            let boosted = RobotState {
                fast_wheels_ticks: robot.fast_wheels_ticks + FAST_WHEELS_TURNS,
                ..robot.clone()
            };
            Ok(state
                .with_robot_state(boosted)
                .with_booster_consumed(Booster::FastWheels)?)
        }

        Action::StartDrill => {
            let robot = state.robot(robot_id)?;
            let boosted = RobotState {
                drill_ticks: robot.drill_ticks + DRILL_TURNS,
                ..robot.clone()
            };
            Ok(state
                .with_robot_state(boosted)
                .with_booster_consumed(Booster::Drill)?)
        }

        Action::PlantTeleportResetPoint => {
            let cell = state.get(position)?;
            let planted = state.update_board(
                position,
                BoardCell {
                    has_teleporter_planted: true,
                    ..cell
                },
            )?;
            Ok(planted
                .with_teleport_target(position)
                .with_booster_consumed(Booster::Teleporter)?)
        }

        // Teleporting back is free and unchecked here; target validity is
        // the legality layer's concern. No wrap is triggered.
        Action::TeleportBack(target) => Ok(state.with_robot_position(robot_id, *target)?),

        Action::AttachManipulator(offset) => {
            let extended = state.robot(robot_id)?.with_arm(*offset);
            Ok(state
                .with_robot_state(extended)
                .with_booster_consumed(Booster::ExtraArm)?)
        }

        Action::CloneRobot => {
            let node = state.node_state(position)?;
            if node.booster != Some(Booster::CloningLocation) {
                return Err(LogicError::NotOnCloneLocation(position).into());
            }
            Ok(state
                .with_new_robot(position)
                .with_booster_consumed(Booster::CloneToken)?)
        }
    }
}

/// Collect a pickable booster from the robot's current cell, if any.
fn pickup_booster_if_available(
    state: &GameState,
    robot_id: RobotId,
) -> Result<GameState, EngineError> {
    let position = state.robot(robot_id)?.position;
    let node = state.node_state(position)?;
    match node.booster {
        Some(booster) if booster.can_pickup() => {
            let collected = state.update_state(
                position,
                NodeState {
                    booster: None,
                    ..node
                },
            )?;
            Ok(collected.with_booster_added(booster))
        }
        _ => Ok(state.clone()),
    }
}

/// Step the robot one cell (two with fast wheels), wrapping after each
/// successful sub-step.
///
/// Speed and drill activity are sampled once, before the first sub-step. A
/// blocked first sub-step is the caller's defect; a blocked second sub-step
/// quietly keeps the first step's position. Timers tick down once per move
/// action, not per sub-step.
fn apply_move(
    state: &GameState,
    robot_id: RobotId,
    movement: Movement,
) -> Result<GameState, EngineError> {
    let before = state.robot(robot_id)?.clone();
    let distance = if before.has_active_fast_wheels() { 2 } else { 1 };

    let mut current = state.clone();
    for step in 0..distance {
        let from = current.robot(robot_id)?.position;
        let to = from.step(movement);
        let blocked = match current.get(to) {
            Err(_) => true,
            Ok(cell) => cell.is_obstacle && !before.has_active_drill(),
        };
        if blocked {
            if step == 0 {
                return Err(LogicError::MoveBlocked {
                    robot: robot_id,
                    from,
                    to,
                }
                .into());
            }
            break;
        }
        current = current.with_robot_position(robot_id, to)?;
        current = wrap_affected_cells(&current, robot_id)?;
    }

    let moved = current.robot(robot_id)?;
    let ticked = RobotState {
        fast_wheels_ticks: if before.has_active_fast_wheels() {
            before.fast_wheels_ticks - 1
        } else {
            0
        },
        drill_ticks: if before.has_active_drill() {
            before.drill_ticks - 1
        } else {
            0
        },
        ..moved.clone()
    };
    Ok(current.with_robot_state(ticked))
}
