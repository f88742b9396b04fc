//! A persistent 2D grid with column-level structural sharing.

use std::sync::Arc;
use wrapsim_core::Point;

/// A rectangular grid of `T`, indexed by [`Point`], with copy-on-write
/// updates.
///
/// Columns are stored behind [`Arc`], so cloning a grid copies `width`
/// pointers and [`Grid::with`] copies exactly one column. A grid handed out
/// earlier is never observably mutated — old snapshots stay valid however
/// many updated descendants exist.
///
/// # Examples
///
/// ```
/// use wrapsim_state::Grid;
/// use wrapsim_core::Point;
///
/// let g = Grid::from_fn(2, 2, |_| 0u8);
/// let g2 = g.with(Point::new(1, 0), 7).unwrap();
/// assert_eq!(g.get(Point::new(1, 0)), Some(&0));
/// assert_eq!(g2.get(Point::new(1, 0)), Some(&7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cols: Vec<Arc<Vec<T>>>,
}

impl<T: Clone> Grid<T> {
    /// Build a `width x height` grid by evaluating `fill` at every point in
    /// canonical column-major order.
    ///
    /// Both dimensions must be positive; the problem parser guarantees this
    /// for boards.
    pub fn from_fn(width: i32, height: i32, mut fill: impl FnMut(Point) -> T) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let cols = (0..width)
            .map(|x| {
                Arc::new((0..height).map(|y| fill(Point::new(x, y))).collect())
            })
            .collect();
        Self {
            width,
            height,
            cols,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `point` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// The value at `point`, or `None` outside the grid.
    pub fn get(&self, point: Point) -> Option<&T> {
        if !self.contains(point) {
            return None;
        }
        Some(&self.cols[point.x as usize][point.y as usize])
    }

    /// A new grid with `point` replaced by `value`, sharing every untouched
    /// column with `self`. Returns `None` outside the grid.
    pub fn with(&self, point: Point, value: T) -> Option<Self> {
        if !self.contains(point) {
            return None;
        }
        let mut next = self.clone();
        let col = Arc::make_mut(&mut next.cols[point.x as usize]);
        col[point.y as usize] = value;
        Some(next)
    }

    /// Iterate `(point, value)` in canonical column-major order
    /// (`x` outer, `y` inner).
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cols.iter().enumerate().flat_map(|(x, col)| {
            col.iter()
                .enumerate()
                .map(move |(y, v)| (Point::new(x as i32, y as i32), v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_every_cell() {
        let g = Grid::from_fn(3, 2, |p| p.x * 10 + p.y);
        assert_eq!(g.get(Point::new(0, 0)), Some(&0));
        assert_eq!(g.get(Point::new(2, 1)), Some(&21));
        assert_eq!(g.iter().count(), 6);
    }

    #[test]
    fn out_of_range_is_none_never_clamped() {
        let g = Grid::from_fn(2, 2, |_| ());
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(2, 0),
            Point::new(0, 2),
        ] {
            assert_eq!(g.get(p), None);
            assert!(g.with(p, ()).is_none());
        }
    }

    #[test]
    fn update_leaves_old_snapshot_untouched() {
        let g0 = Grid::from_fn(4, 4, |_| 0u32);
        let g1 = g0.with(Point::new(1, 2), 5).unwrap();
        let g2 = g1.with(Point::new(1, 3), 9).unwrap();

        assert_eq!(g0.get(Point::new(1, 2)), Some(&0));
        assert_eq!(g1.get(Point::new(1, 2)), Some(&5));
        assert_eq!(g1.get(Point::new(1, 3)), Some(&0));
        assert_eq!(g2.get(Point::new(1, 2)), Some(&5));
        assert_eq!(g2.get(Point::new(1, 3)), Some(&9));
    }

    #[test]
    fn iteration_is_column_major() {
        let g = Grid::from_fn(2, 2, |p| p);
        let order: Vec<Point> = g.iter().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1)
            ]
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Any chain of updates leaves every earlier snapshot exactly as
            // it was handed out.
            #[test]
            fn snapshots_survive_descendant_updates(
                writes in prop::collection::vec((0i32..4, 0i32..4, any::<u8>()), 1..20)
            ) {
                let mut expected = vec![vec![0u8; 16]];
                let mut snapshots = vec![Grid::from_fn(4, 4, |_| 0u8)];
                for (x, y, value) in writes {
                    let mut cells = expected.last().expect("non-empty").clone();
                    cells[(x * 4 + y) as usize] = value;
                    expected.push(cells);
                    let next = snapshots
                        .last()
                        .expect("non-empty")
                        .with(Point::new(x, y), value)
                        .expect("in range");
                    snapshots.push(next);
                }
                for (grid, cells) in snapshots.iter().zip(&expected) {
                    for (point, value) in grid.iter() {
                        prop_assert_eq!(*value, cells[(point.x * 4 + point.y) as usize]);
                    }
                }
            }
        }
    }
}
