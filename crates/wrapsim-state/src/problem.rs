//! Character-grid problem parsing and board rendering.
//!
//! A problem is a rectangular grid of cell codes, rows given top to bottom
//! (the bottom row is `y = 0`): `.` empty, `X` obstacle, `@` the start
//! point, booster letters per [`Booster`] (case-insensitive, except that
//! uppercase `X` always means obstacle), `w` a pre-wrapped cell and `*` a
//! planted teleporter. Anything else is a parse error, reported once at load
//! time.

use crate::board::{Board, BoardCell, NodeState};
use crate::game::GameState;
use crate::grid::Grid;
use std::error::Error;
use std::fmt;
use wrapsim_core::{Booster, Point};

/// One parsed problem cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProblemCell {
    /// Structural wall flag.
    pub is_obstacle: bool,
    /// Pre-wrapped (only appears in fixtures and saved states).
    pub is_wrapped: bool,
    /// Planted teleporter flag.
    pub has_teleporter_planted: bool,
    /// Booster lying on the cell.
    pub booster: Option<Booster>,
}

/// A parsed problem description.
#[derive(Clone, Debug)]
pub struct Problem {
    /// Problem name, echoed in diagnostics only.
    pub name: String,
    /// The single start point (origin when the grid has no `@`).
    pub start: Point,
    /// Per-cell description.
    pub cells: Grid<ProblemCell>,
}

impl Problem {
    /// Board width in cells.
    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    /// Board height in cells.
    pub fn height(&self) -> i32 {
        self.cells.height()
    }
}

/// A malformed problem description.
///
/// Load-time only; never part of the engine's runtime error surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The description contained no non-blank rows.
    EmptyBoard,
    /// A row's length disagreed with the first row's.
    UnevenRows {
        /// Zero-based row index in the input (top to bottom).
        line: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character outside the cell alphabet.
    UnknownChar {
        /// The offending character.
        ch: char,
        /// Board x of the cell.
        x: i32,
        /// Board y of the cell.
        y: i32,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "problem description has no rows"),
            Self::UnevenRows {
                line,
                expected,
                found,
            } => write!(
                f,
                "row {line} has {found} cells, expected {expected}"
            ),
            Self::UnknownChar { ch, x, y } => {
                write!(f, "unknown cell character '{ch}' at ({x},{y})")
            }
        }
    }
}

impl Error for ParseError {}

/// Parse a character-grid problem description.
///
/// # Examples
///
/// ```
/// use wrapsim_state::parse_problem;
/// use wrapsim_core::Point;
///
/// let p = parse_problem("drill", "..X..\n@lX..\n..X..").unwrap();
/// assert_eq!((p.width(), p.height()), (5, 3));
/// assert_eq!(p.start, Point::new(0, 1));
/// ```
pub fn parse_problem(name: &str, text: &str) -> Result<Problem, ParseError> {
    let rows: Vec<String> = text
        .lines()
        .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|l| !l.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(ParseError::EmptyBoard);
    }

    let width = rows[0].chars().count();
    for (line, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(ParseError::UnevenRows {
                line,
                expected: width,
                found,
            });
        }
    }

    let height = rows.len();
    // Input is top to bottom; board y grows upward.
    let cell_at = |x: usize, y: usize| rows[height - 1 - y].chars().nth(x).unwrap_or('.');

    let mut start = Point::ORIGIN;
    let mut parsed = vec![vec![ProblemCell::default(); height]; width];
    for (x, col) in parsed.iter_mut().enumerate() {
        for (y, cell) in col.iter_mut().enumerate() {
            let ch = cell_at(x, y);
            *cell = match ch {
                '.' => ProblemCell::default(),
                'X' => ProblemCell {
                    is_obstacle: true,
                    ..ProblemCell::default()
                },
                '@' => {
                    start = Point::new(x as i32, y as i32);
                    ProblemCell::default()
                }
                'w' => ProblemCell {
                    is_wrapped: true,
                    ..ProblemCell::default()
                },
                '*' => ProblemCell {
                    is_wrapped: true,
                    has_teleporter_planted: true,
                    ..ProblemCell::default()
                },
                other => match Booster::from_char(other) {
                    Some(b) => ProblemCell {
                        booster: Some(b),
                        ..ProblemCell::default()
                    },
                    None => {
                        return Err(ParseError::UnknownChar {
                            ch: other,
                            x: x as i32,
                            y: y as i32,
                        })
                    }
                },
            };
        }
    }

    Ok(Problem {
        name: name.to_owned(),
        start,
        cells: Grid::from_fn(width as i32, height as i32, |p| {
            parsed[p.x as usize][p.y as usize]
        }),
    })
}

/// Render a game state back into the character grid, top row first.
///
/// Cell precedence: planted teleporter `*`, wrapped `w`, the start point
/// `@`, obstacle `X`, booster letter, `.`. The output of a fully played
/// state is directly comparable against expectation fixtures.
pub fn render(state: &GameState) -> String {
    let mut out = String::new();
    for y in (0..state.height()).rev() {
        for x in 0..state.width() {
            let point = Point::new(x, y);
            // In-range by construction.
            let cell = state.get(point).unwrap_or_default();
            let node = state.node_state(point).unwrap_or_default();
            let ch = if cell.has_teleporter_planted {
                '*'
            } else if node.is_wrapped {
                'w'
            } else if point == state.start() {
                '@'
            } else if cell.is_obstacle {
                'X'
            } else if let Some(b) = node.booster {
                b.to_char()
            } else {
                '.'
            };
            out.push(ch);
        }
        if y > 0 {
            out.push('\n');
        }
    }
    out
}

/// Convenience used by fixtures: strip indentation and blank lines from an
/// expectation grid so it compares equal to [`render`] output.
pub fn normalize_grid(text: &str) -> String {
    text.lines()
        .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

impl Problem {
    /// The structural board described by this problem.
    pub fn board(&self) -> Board {
        Board::new(Grid::from_fn(self.width(), self.height(), |p| {
            let cell = self.cells.get(p).copied().unwrap_or_default();
            BoardCell {
                is_obstacle: cell.is_obstacle,
                has_teleporter_planted: cell.has_teleporter_planted,
            }
        }))
    }

    /// The initial per-cell dynamic state described by this problem.
    pub fn node_states(&self) -> Grid<NodeState> {
        Grid::from_fn(self.width(), self.height(), |p| {
            let cell = self.cells.get(p).copied().unwrap_or_default();
            NodeState {
                is_wrapped: cell.is_wrapped,
                booster: cell.booster,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_obstacles_and_boosters() {
        let p = parse_problem("t", "..X..\n@lX..\n..X..").unwrap();
        assert_eq!(p.start, Point::new(0, 1));
        let drill = p.cells.get(Point::new(1, 1)).unwrap();
        assert_eq!(drill.booster, Some(Booster::Drill));
        assert!(p.cells.get(Point::new(2, 0)).unwrap().is_obstacle);
        assert!(p.cells.get(Point::new(2, 2)).unwrap().is_obstacle);
    }

    #[test]
    fn uppercase_x_is_an_obstacle_lowercase_a_cloning_location() {
        let p = parse_problem("t", "Xx@").unwrap();
        assert!(p.cells.get(Point::new(0, 0)).unwrap().is_obstacle);
        assert_eq!(
            p.cells.get(Point::new(1, 0)).unwrap().booster,
            Some(Booster::CloningLocation)
        );
    }

    #[test]
    fn rejects_unknown_characters_with_position() {
        let err = parse_problem("t", "..\n.?").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownChar {
                ch: '?',
                x: 1,
                y: 0
            }
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_problem("t", "...\n..").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnevenRows {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn missing_start_defaults_to_origin() {
        let p = parse_problem("t", "..\n..").unwrap();
        assert_eq!(p.start, Point::ORIGIN);
    }

    #[test]
    fn star_cells_are_wrapped_and_planted() {
        let p = parse_problem("t", "*@").unwrap();
        let cell = p.cells.get(Point::ORIGIN).unwrap();
        assert!(cell.is_wrapped);
        assert!(cell.has_teleporter_planted);
    }
}
