//! The structural board and per-cell dynamic node state.

use crate::grid::Grid;
use wrapsim_core::{BoardGenerationId, Booster, BoundsError, Point};

/// Structural per-cell board data, fixed at construction except for two
/// one-way transitions: drilling clears `is_obstacle` and planting sets
/// `has_teleporter_planted`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardCell {
    /// Whether the cell is (still) a wall.
    pub is_obstacle: bool,
    /// Whether a teleport reset point has been planted here.
    pub has_teleporter_planted: bool,
}

/// Dynamic per-cell state: paint and booster presence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeState {
    /// Whether the cell has been painted. Transitions false→true only.
    pub is_wrapped: bool,
    /// Booster lying on the cell, if any. Pickable boosters transition to
    /// `None` on collection; cloning locations never do.
    pub booster: Option<Booster>,
}

impl NodeState {
    /// Whether any booster lies on this cell.
    pub const fn has_booster(&self) -> bool {
        self.booster.is_some()
    }
}

/// The structural grid of a game, stamped with a generation id.
///
/// Boards are persistent values: [`Board::with_cell`] returns a new board
/// sharing untouched columns and carrying a fresh [`BoardGenerationId`], so
/// derived artifacts (adjacency graphs) can be cached by id.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Grid<BoardCell>,
    generation: BoardGenerationId,
}

impl Board {
    /// Wrap a cell grid into a board with a fresh generation id.
    pub fn new(cells: Grid<BoardCell>) -> Self {
        Self {
            cells,
            generation: BoardGenerationId::next(),
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    /// Board height in cells.
    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// Identity of this board value for cache keying.
    pub fn generation(&self) -> BoardGenerationId {
        self.generation
    }

    /// Whether `point` lies on the board.
    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(point)
    }

    /// The cell at `point`, or [`BoundsError`] outside the board.
    pub fn get(&self, point: Point) -> Result<BoardCell, BoundsError> {
        self.cells
            .get(point)
            .copied()
            .ok_or_else(|| self.bounds_error(point))
    }

    /// A new board with `point` replaced, under a fresh generation id.
    pub fn with_cell(&self, point: Point, cell: BoardCell) -> Result<Board, BoundsError> {
        let cells = self
            .cells
            .with(point, cell)
            .ok_or_else(|| self.bounds_error(point))?;
        Ok(Board::new(cells))
    }

    /// Iterate every `(point, cell)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &BoardCell)> {
        self.cells.iter()
    }

    /// Iterate the non-obstacle cells in canonical order.
    pub fn non_obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter(|(_, c)| !c.is_obstacle)
            .map(|(p, _)| p)
    }

    fn bounds_error(&self, point: Point) -> BoundsError {
        BoundsError {
            point,
            width: self.width(),
            height: self.height(),
        }
    }
}
