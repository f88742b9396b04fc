//! Wrap propagation and manipulator line-of-sight.
//!
//! Invoked after every position or orientation change. The robot's own cell
//! is always painted; each arm cell is painted only if no obstacle shadows
//! it. Two independent sightline tests apply, one along the robot's own
//! column and one along the arm column immediately to its right, each
//! scanning up to [`SIGHT_RANGE`] cells. The asymmetric shadow ranges below
//! are contractual — the fixture boards in `tests/scenarios.rs` pin them
//! cell for cell.

use wrapsim_core::{EngineError, LogicError, Point, RobotId};
use wrapsim_state::{BoardCell, GameState, NodeState};

/// How far each sightline scan looks for the first obstacle.
pub(crate) const SIGHT_RANGE: i32 = 8;

/// Repaint everything the robot covers from its current position.
///
/// If the robot stands on an obstacle it must hold an active drill (the
/// movement code only routes it here in that case); the obstacle is bored
/// open permanently before painting.
pub(crate) fn wrap_affected_cells(
    state: &GameState,
    robot_id: RobotId,
) -> Result<GameState, EngineError> {
    let robot = state.robot(robot_id)?.clone();
    let robot_point = robot.position;
    let cell = state.get(robot_point)?;

    let mut next = if cell.is_obstacle {
        if !robot.has_active_drill() {
            return Err(LogicError::DrillRequired(robot_point).into());
        }
        state.update_board(
            robot_point,
            BoardCell {
                is_obstacle: false,
                ..cell
            },
        )?
    } else {
        state.clone()
    };

    next = wrap_point(next, robot_point)?;

    // First obstacle offset along the robot's own column, up and down.
    let wall_robot_up = first_wall(&next, robot_point, 0, 1);
    let wall_robot_down = first_wall(&next, robot_point, 0, -1);
    // First obstacle offset along the arm column (x = +1), up and down.
    let wall_arm_up = first_wall(&next, robot_point, 1, 1);
    let wall_arm_down = first_wall(&next, robot_point, 1, -1);

    // A wall at +k on the robot column hides arm offsets above 2k-1; the
    // mirrored bound holds below. Offsets with y in {0, 1} always pass.
    let max_up = wall_robot_up.map(|k| 2 * k - 1).unwrap_or(i32::MAX);
    let max_down = wall_robot_down.map(|k| -2 * k - 1).unwrap_or(i32::MAX);

    // A wall at +k on the arm column shadows arm offsets with y in [k, 2k];
    // mirrored below. Offsets with y in {0, 1} always pass.
    let shadow_up = wall_arm_up.map(|k| (k, 2 * k));
    let shadow_down = wall_arm_down.map(|k| (-k, -2 * k));

    let visible = |arm: Point| -> bool {
        let by_robot_column = if arm.y > 1 {
            arm.y <= max_up
        } else if arm.y < 0 {
            -arm.y <= max_down
        } else {
            true
        };
        let by_arm_column = if arm.y > 1 {
            !in_shadow(shadow_up, arm.y)
        } else if arm.y < 0 {
            !in_shadow(shadow_down, -arm.y)
        } else {
            true
        };
        by_robot_column && by_arm_column
    };

    for &arm in &robot.arms {
        let world = robot_point + arm;
        let Ok(cell) = next.get(world) else {
            continue;
        };
        if cell.is_obstacle || !visible(arm) {
            continue;
        }
        next = wrap_point(next, world)?;
    }

    Ok(next)
}

/// Offset of the first obstacle scanning `dir` (±1) along the column
/// `col_dx` cells right of the robot, within [`SIGHT_RANGE`]. Off-board
/// cells are skipped, not treated as walls.
fn first_wall(state: &GameState, origin: Point, col_dx: i32, dir: i32) -> Option<i32> {
    (1..=SIGHT_RANGE).map(|step| step * dir).find(|&dy| {
        let p = Point::new(origin.x + col_dx, origin.y + dy);
        state.get(p).map(|c| c.is_obstacle).unwrap_or(false)
    })
}

/// Whether `distance` (always positive here) falls inside a shadow band.
fn in_shadow(band: Option<(i32, i32)>, distance: i32) -> bool {
    match band {
        Some((lo, hi)) => distance >= lo && distance <= hi,
        None => false,
    }
}

fn wrap_point(state: GameState, point: Point) -> Result<GameState, EngineError> {
    let node = state.node_state(point)?;
    if node.is_wrapped {
        return Ok(state);
    }
    Ok(state.update_state(
        point,
        NodeState {
            is_wrapped: true,
            ..node
        },
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapsim_state::parse_problem;

    fn state(text: &str) -> GameState {
        GameState::from_problem(&parse_problem("t", text).unwrap())
    }

    #[test]
    fn first_wall_reports_signed_offsets() {
        // Robot column holds a wall two above and one below the start.
        let s = state(
            "X.
             ..
             @.
             X.",
        );
        let origin = Point::new(0, 1);
        assert_eq!(first_wall(&s, origin, 0, 1), Some(2));
        assert_eq!(first_wall(&s, origin, 0, -1), Some(-1));
        assert_eq!(first_wall(&s, origin, 1, 1), None);
    }

    #[test]
    fn scan_stops_at_sight_range() {
        // A wall nine cells up is out of sight.
        let mut rows = vec!["X."];
        rows.extend(std::iter::repeat("..").take(8));
        rows.push("@.");
        let s = state(&rows.join("\n"));
        assert_eq!(first_wall(&s, Point::ORIGIN, 0, 1), None);
    }

    #[test]
    fn standing_on_an_obstacle_without_a_drill_is_a_defect() {
        let s = state("@X");
        let s = s
            .with_robot_position(wrapsim_core::RobotId::FIRST, Point::new(1, 0))
            .unwrap();
        let err = wrap_affected_cells(&s, wrapsim_core::RobotId::FIRST).unwrap_err();
        assert_eq!(
            err,
            EngineError::Logic(LogicError::DrillRequired(Point::new(1, 0)))
        );
    }
}
