//! Adjacency graphs over a board's non-obstacle cells.

use indexmap::IndexMap;
use wrapsim_core::{BoardGenerationId, MovementSpeed, Point};
use wrapsim_state::Board;

/// An immutable adjacency-list graph for one board and movement speed.
///
/// Vertices are the board's non-obstacle cells in canonical column-major
/// order; an `IndexMap` gives both directions of the point/index mapping.
/// Neighbor lists follow the fixed cardinal enumeration order, so every
/// traversal of the graph is deterministic.
#[derive(Clone, Debug)]
pub struct BoardGraph {
    board_generation: BoardGenerationId,
    speed: MovementSpeed,
    index: IndexMap<Point, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl BoardGraph {
    /// Build the graph for `board` under `speed`.
    ///
    /// `Normal` connects 4-neighbors. `Fast` replaces each single-step edge
    /// with the double-step edge in the same direction when both the
    /// intermediate and the far cell are traversable; when only the near
    /// cell is, the single-step edge is kept. A fast move whose second cell
    /// is blocked still advances one, so the fallback edge mirrors what the
    /// robot can actually do.
    pub fn build(board: &Board, speed: MovementSpeed) -> BoardGraph {
        let traversable = |point: Point| {
            board
                .get(point)
                .map(|cell| !cell.is_obstacle)
                .unwrap_or(false)
        };

        let mut index = IndexMap::new();
        for point in board.non_obstacles() {
            index.insert(point, index.len());
        }

        let mut adjacency = Vec::with_capacity(index.len());
        for &point in index.keys() {
            let mut out = Vec::new();
            for (near, movement) in point.neighbors() {
                if !traversable(near) {
                    continue;
                }
                let target = match speed {
                    MovementSpeed::Normal => near,
                    MovementSpeed::Fast => {
                        let far = near.step(movement);
                        if traversable(far) {
                            far
                        } else {
                            near
                        }
                    }
                };
                if let Some(&target_index) = index.get(&target) {
                    out.push(target_index);
                }
            }
            adjacency.push(out);
        }

        BoardGraph {
            board_generation: board.generation(),
            speed,
            index,
            adjacency,
        }
    }

    /// Identity of the board this graph was built from.
    pub fn board_generation(&self) -> BoardGenerationId {
        self.board_generation
    }

    /// The movement speed the edge set encodes.
    pub fn speed(&self) -> MovementSpeed {
        self.speed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// The vertex index of `point`, if it is a non-obstacle cell.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.index.get(&point).copied()
    }

    /// The point at `vertex`.
    ///
    /// Indices outside the graph return `None`; indices obtained from this
    /// graph are always valid.
    pub fn point_of(&self, vertex: usize) -> Option<Point> {
        self.index.get_index(vertex).map(|(&point, _)| point)
    }

    /// Outgoing neighbor indices of `vertex`, in enumeration order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All vertex points in canonical order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.index.keys().copied()
    }
}
