//! The copy-on-write game state aggregate.

use crate::board::{Board, BoardCell, NodeState};
use crate::grid::Grid;
use crate::problem::Problem;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use wrapsim_core::{
    Booster, BoundsError, LogicError, Point, RobotId, RobotState, StateGenerationId,
};

/// Shared inventory of unused boosters, counted per variant.
///
/// Counts never go negative: consuming at zero is a [`LogicError`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Backpack([u32; Booster::COUNT]);

impl Backpack {
    /// Unused count for `booster`.
    pub fn count(&self, booster: Booster) -> u32 {
        self.0[booster.index()]
    }

    /// Whether at least one `booster` is unused.
    pub fn contains(&self, booster: Booster) -> bool {
        self.count(booster) > 0
    }

    /// This backpack with one more `booster`.
    pub fn with_added(&self, booster: Booster) -> Backpack {
        let mut next = *self;
        next.0[booster.index()] += 1;
        next
    }

    /// This backpack with one `booster` consumed.
    pub fn with_consumed(&self, booster: Booster) -> Result<Backpack, LogicError> {
        if !self.contains(booster) {
            return Err(LogicError::BoosterUnavailable(booster));
        }
        let mut next = *self;
        next.0[booster.index()] -= 1;
        Ok(next)
    }
}

/// The complete, immutable state of a game in progress.
///
/// Every mutator returns a new `GameState`; grids share untouched columns
/// with their ancestors, so cloning a state to explore a candidate future is
/// cheap and can never disturb the original.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    states: Grid<NodeState>,
    state_generation: StateGenerationId,
    /// Non-obstacle cells still unwrapped; completion is `== 0`.
    unwrapped: usize,
    start: Point,
    robots: IndexMap<RobotId, RobotState>,
    teleport_targets: BTreeSet<Point>,
    backpack: Backpack,
}

impl GameState {
    /// Construct the initial state of a problem: its board and node states
    /// copied 1:1, one robot at the start point, empty inventory, no
    /// teleport targets.
    ///
    /// The start cell is not yet wrapped; the engine's `initialize`
    /// performs the first wrap.
    pub fn from_problem(problem: &Problem) -> GameState {
        let board = problem.board();
        let states = problem.node_states();
        let unwrapped = board
            .non_obstacles()
            .filter(|&p| !states.get(p).map(|n| n.is_wrapped).unwrap_or(false))
            .count();
        let mut robots = IndexMap::new();
        let first = RobotState::new(RobotId::FIRST, problem.start);
        robots.insert(first.id, first);
        GameState {
            board,
            states,
            state_generation: StateGenerationId::next(),
            unwrapped,
            start: problem.start,
            robots,
            teleport_targets: BTreeSet::new(),
            backpack: Backpack::default(),
        }
    }

    // ── Read accessors ──────────────────────────────────────────

    /// The structural board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Identity of the current node-state grid for cache keying.
    pub fn state_generation(&self) -> StateGenerationId {
        self.state_generation
    }

    /// Board width in cells.
    pub fn width(&self) -> i32 {
        self.board.width()
    }

    /// Board height in cells.
    pub fn height(&self) -> i32 {
        self.board.height()
    }

    /// The problem's start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Whether `point` lies on the board.
    pub fn is_in_board(&self, point: Point) -> bool {
        self.board.contains(point)
    }

    /// The structural cell at `point`.
    pub fn get(&self, point: Point) -> Result<BoardCell, BoundsError> {
        self.board.get(point)
    }

    /// The dynamic node state at `point`.
    pub fn node_state(&self, point: Point) -> Result<NodeState, BoundsError> {
        self.states.get(point).copied().ok_or(BoundsError {
            point,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The state of one robot.
    pub fn robot(&self, id: RobotId) -> Result<&RobotState, LogicError> {
        self.robots.get(&id).ok_or(LogicError::UnknownRobot(id))
    }

    /// All robot ids, ascending.
    pub fn all_robot_ids(&self) -> Vec<RobotId> {
        let mut ids: Vec<RobotId> = self.robots.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate all robots in registration order.
    pub fn robots(&self) -> impl Iterator<Item = &RobotState> {
        self.robots.values()
    }

    /// Whether every non-obstacle cell is wrapped.
    pub fn is_complete(&self) -> bool {
        self.unwrapped == 0
    }

    /// Whether the inventory holds at least one unused `booster`.
    pub fn backpack_contains(&self, booster: Booster) -> bool {
        self.backpack.contains(booster)
    }

    /// Unused inventory count for `booster`.
    pub fn boosters_available(&self, booster: Booster) -> u32 {
        self.backpack.count(booster)
    }

    /// Planted teleport targets, ascending.
    pub fn teleport_targets(&self) -> impl Iterator<Item = Point> + '_ {
        self.teleport_targets.iter().copied()
    }

    /// Whether `point` is a planted teleport target.
    pub fn is_teleport_target(&self, point: Point) -> bool {
        self.teleport_targets.contains(&point)
    }

    // ── Copy-on-write mutators ──────────────────────────────────

    /// A state with the structural cell at `point` replaced.
    ///
    /// Clearing an obstacle re-counts the cell as needing wrapping until
    /// some robot paints it (the drill path does so in the same action).
    pub fn update_board(&self, point: Point, cell: BoardCell) -> Result<GameState, BoundsError> {
        let old = self.board.get(point)?;
        let mut next = self.clone();
        next.board = self.board.with_cell(point, cell)?;
        if old.is_obstacle && !cell.is_obstacle {
            let wrapped = self.node_state(point)?.is_wrapped;
            if !wrapped {
                next.unwrapped += 1;
            }
        }
        Ok(next)
    }

    /// A state with the node state at `point` replaced, under a fresh state
    /// generation.
    pub fn update_state(&self, point: Point, node: NodeState) -> Result<GameState, BoundsError> {
        let old = self.node_state(point)?;
        let mut next = self.clone();
        next.states = self.states.with(point, node).ok_or(BoundsError {
            point,
            width: self.width(),
            height: self.height(),
        })?;
        next.state_generation = StateGenerationId::next();
        if !self.board.get(point)?.is_obstacle {
            match (old.is_wrapped, node.is_wrapped) {
                (false, true) => next.unwrapped -= 1,
                (true, false) => next.unwrapped += 1,
                _ => {}
            }
        }
        Ok(next)
    }

    /// A state with `robot` inserted or replaced, keyed by its id.
    pub fn with_robot_state(&self, robot: RobotState) -> GameState {
        let mut next = self.clone();
        next.robots.insert(robot.id, robot);
        next
    }

    /// A state with one robot relocated to `point`.
    pub fn with_robot_position(&self, id: RobotId, point: Point) -> Result<GameState, LogicError> {
        let moved = self.robot(id)?.at(point);
        Ok(self.with_robot_state(moved))
    }

    /// A state with a freshly minted robot (default arms and orientation)
    /// at `position`. The new id is `max(existing ids).next()`.
    pub fn with_new_robot(&self, position: Point) -> GameState {
        let new_id = self
            .robots
            .keys()
            .copied()
            .max()
            .map(RobotId::next)
            .unwrap_or(RobotId::FIRST);
        self.with_robot_state(RobotState::new(new_id, position))
    }

    /// A state with `point` recorded as a teleport target.
    pub fn with_teleport_target(&self, point: Point) -> GameState {
        let mut next = self.clone();
        next.teleport_targets.insert(point);
        next
    }

    /// A state with one more unused `booster` in the inventory.
    pub fn with_booster_added(&self, booster: Booster) -> GameState {
        let mut next = self.clone();
        next.backpack = self.backpack.with_added(booster);
        next
    }

    /// A state with one unused `booster` consumed.
    pub fn with_booster_consumed(&self, booster: Booster) -> Result<GameState, LogicError> {
        let mut next = self.clone();
        next.backpack = self.backpack.with_consumed(booster)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::parse_problem;

    fn state(text: &str) -> GameState {
        GameState::from_problem(&parse_problem("test", text).unwrap())
    }

    #[test]
    fn from_problem_places_one_robot_at_start() {
        let s = state("..\n@.");
        assert_eq!(s.all_robot_ids(), vec![RobotId::FIRST]);
        assert_eq!(s.robot(RobotId::FIRST).unwrap().position, Point::ORIGIN);
        assert!(!s.is_complete());
        assert_eq!(s.boosters_available(Booster::Drill), 0);
    }

    #[test]
    fn accessors_reject_out_of_board_points() {
        let s = state("@.");
        assert!(s.get(Point::new(2, 0)).is_err());
        assert!(s.node_state(Point::new(0, 1)).is_err());
        assert!(s.node_state(Point::new(0, -1)).is_err());
    }

    #[test]
    fn completion_tracks_wrapping() {
        let s = state("@.");
        let s = s
            .update_state(
                Point::ORIGIN,
                NodeState {
                    is_wrapped: true,
                    booster: None,
                },
            )
            .unwrap();
        assert!(!s.is_complete());
        let s = s
            .update_state(
                Point::new(1, 0),
                NodeState {
                    is_wrapped: true,
                    booster: None,
                },
            )
            .unwrap();
        assert!(s.is_complete());
    }

    #[test]
    fn obstacles_do_not_count_toward_completion() {
        let s = state("@X");
        let s = s
            .update_state(
                Point::ORIGIN,
                NodeState {
                    is_wrapped: true,
                    booster: None,
                },
            )
            .unwrap();
        assert!(s.is_complete());
    }

    #[test]
    fn drilled_obstacle_needs_wrapping_again() {
        let s = state("@X");
        let s = s
            .update_state(
                Point::ORIGIN,
                NodeState {
                    is_wrapped: true,
                    booster: None,
                },
            )
            .unwrap();
        let s = s
            .update_board(Point::new(1, 0), BoardCell::default())
            .unwrap();
        assert!(!s.is_complete());
    }

    #[test]
    fn consuming_an_absent_booster_fails() {
        let s = state("@.");
        assert_eq!(
            s.with_booster_consumed(Booster::FastWheels).unwrap_err(),
            LogicError::BoosterUnavailable(Booster::FastWheels)
        );
        let s = s.with_booster_added(Booster::FastWheels);
        let s = s.with_booster_consumed(Booster::FastWheels).unwrap();
        assert_eq!(s.boosters_available(Booster::FastWheels), 0);
    }

    #[test]
    fn updates_never_disturb_older_snapshots() {
        let s0 = state("@.");
        let s1 = s0
            .update_state(
                Point::new(1, 0),
                NodeState {
                    is_wrapped: true,
                    booster: None,
                },
            )
            .unwrap();
        assert!(!s0.node_state(Point::new(1, 0)).unwrap().is_wrapped);
        assert!(s1.node_state(Point::new(1, 0)).unwrap().is_wrapped);
        assert_ne!(s0.state_generation(), s1.state_generation());
    }

    #[test]
    fn cloned_robots_get_the_next_id() {
        let s = state("@.");
        let s = s.with_new_robot(Point::ORIGIN);
        assert_eq!(s.all_robot_ids(), vec![RobotId(0), RobotId(1)]);
        let s = s.with_new_robot(Point::new(1, 0));
        assert_eq!(s.all_robot_ids(), vec![RobotId(0), RobotId(1), RobotId(2)]);
    }
}
