//! Weighted shortest paths over a board graph.
//!
//! Both algorithms read the dynamic cell classes from a [`GameState`] at
//! query time, so one graph serves every state of the same board. Results
//! hold the graph they were computed against; they stay valid snapshots
//! even after the caller moves on to newer states.

use crate::graph::BoardGraph;
use crate::weight::WeightPolicy;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use wrapsim_core::{BoardGenerationId, Point};
use wrapsim_state::{GameState, NodeState};

/// A failed path query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavError {
    /// The query point is an obstacle or off the board.
    UnknownVertex(Point),
    /// The graph was built from a different board than the state holds.
    StaleGraph {
        /// Generation the graph was built from.
        graph: BoardGenerationId,
        /// Generation of the state's board.
        board: BoardGenerationId,
    },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex(point) => {
                write!(f, "point {point} is not a graph vertex")
            }
            Self::StaleGraph { graph, board } => write!(
                f,
                "graph was built from board {graph}, state holds board {board}"
            ),
        }
    }
}

impl Error for NavError {}

/// `f64` cost with a total order, for heap keys.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Single-source distances and parent links from one [`dijkstra`] run.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    graph: Arc<BoardGraph>,
    source: Point,
    distance: Vec<f64>,
    parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// The source point the run started from.
    pub fn source(&self) -> Point {
        self.source
    }

    /// The graph the run was computed against.
    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    /// Total cost to `target`, `None` when unreachable or not a vertex.
    pub fn distance_to(&self, target: Point) -> Option<f64> {
        let vertex = self.graph.index_of(target)?;
        let d = self.distance[vertex];
        d.is_finite().then_some(d)
    }

    /// The vertex list from the source to `target` inclusive, `None` when
    /// unreachable.
    pub fn path_to(&self, target: Point) -> Option<Vec<Point>> {
        let mut vertex = self.graph.index_of(target)?;
        if !self.distance[vertex].is_finite() {
            return None;
        }
        let mut path = vec![target];
        while let Some(prev) = self.parent[vertex] {
            path.push(self.graph.point_of(prev)?);
            vertex = prev;
        }
        path.reverse();
        Some(path)
    }
}

fn node_class(state: &GameState, point: Point) -> NodeState {
    // Graph vertices are always in-board.
    state.node_state(point).unwrap_or_default()
}

fn check_generation(graph: &BoardGraph, state: &GameState) -> Result<(), NavError> {
    let board = state.board().generation();
    if graph.board_generation() != board {
        return Err(NavError::StaleGraph {
            graph: graph.board_generation(),
            board,
        });
    }
    Ok(())
}

/// Dijkstra from `source` over `graph`, weighting edges by the cell classes
/// in `state`.
///
/// Deterministic: the queue is ordered by `(cost, point)` so the
/// lexicographically smaller point settles first on cost ties, and a parent
/// link only changes on strict improvement.
pub fn dijkstra(
    graph: Arc<BoardGraph>,
    state: &GameState,
    policy: &WeightPolicy,
    source: Point,
) -> Result<ShortestPaths, NavError> {
    check_generation(&graph, state)?;
    let source_vertex = graph
        .index_of(source)
        .ok_or(NavError::UnknownVertex(source))?;

    let n = graph.vertex_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    distance[source_vertex] = 0.0;

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((Cost(0.0), source, source_vertex)));

    while let Some(Reverse((Cost(cost), point, vertex))) = queue.pop() {
        if cost > distance[vertex] {
            continue;
        }
        let from = node_class(state, point);
        for &next in graph.neighbors(vertex) {
            let Some(next_point) = graph.point_of(next) else {
                continue;
            };
            let candidate = cost + policy.edge_weight(from, node_class(state, next_point));
            if candidate < distance[next] {
                distance[next] = candidate;
                parent[next] = Some(vertex);
                queue.push(Reverse((Cost(candidate), next_point, next)));
            }
        }
    }

    Ok(ShortestPaths {
        graph,
        source,
        distance,
        parent,
    })
}

/// All-pairs distances with next-hop path reconstruction.
#[derive(Clone, Debug)]
pub struct AllPairs {
    graph: Arc<BoardGraph>,
    distance: Vec<f64>,
    next: Vec<Option<usize>>,
}

impl AllPairs {
    fn cell(&self, from: usize, to: usize) -> usize {
        from * self.graph.vertex_count() + to
    }

    /// The graph the run was computed against.
    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    /// Total cost from `from` to `to`, `None` when unreachable or either
    /// point is not a vertex.
    pub fn distance(&self, from: Point, to: Point) -> Option<f64> {
        let a = self.graph.index_of(from)?;
        let b = self.graph.index_of(to)?;
        let d = self.distance[self.cell(a, b)];
        d.is_finite().then_some(d)
    }

    /// The vertex list from `from` to `to` inclusive, `None` when
    /// unreachable.
    pub fn path(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        let mut vertex = self.graph.index_of(from)?;
        let target = self.graph.index_of(to)?;
        if !self.distance[self.cell(vertex, target)].is_finite() {
            return None;
        }
        let mut path = vec![from];
        while vertex != target {
            vertex = self.next[self.cell(vertex, target)]?;
            path.push(self.graph.point_of(vertex)?);
        }
        Some(path)
    }
}

/// Floyd–Warshall over `graph`, weighting edges by the cell classes in
/// `state`.
///
/// Pivots are taken in canonical vertex order with strict-improvement
/// updates, so path choice is deterministic.
pub fn floyd_warshall(
    graph: Arc<BoardGraph>,
    state: &GameState,
    policy: &WeightPolicy,
) -> Result<AllPairs, NavError> {
    check_generation(&graph, state)?;
    let n = graph.vertex_count();
    let mut distance = vec![f64::INFINITY; n * n];
    let mut next: Vec<Option<usize>> = vec![None; n * n];

    for vertex in 0..n {
        distance[vertex * n + vertex] = 0.0;
        next[vertex * n + vertex] = Some(vertex);
        let Some(point) = graph.point_of(vertex) else {
            continue;
        };
        let from = node_class(state, point);
        for &neighbor in graph.neighbors(vertex) {
            let Some(neighbor_point) = graph.point_of(neighbor) else {
                continue;
            };
            let weight = policy.edge_weight(from, node_class(state, neighbor_point));
            let cell = vertex * n + neighbor;
            if weight < distance[cell] {
                distance[cell] = weight;
                next[cell] = Some(neighbor);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let through_k = distance[i * n + k];
            if !through_k.is_finite() {
                continue;
            }
            for j in 0..n {
                let candidate = through_k + distance[k * n + j];
                if candidate < distance[i * n + j] {
                    distance[i * n + j] = candidate;
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
    }

    Ok(AllPairs {
        graph,
        distance,
        next,
    })
}
