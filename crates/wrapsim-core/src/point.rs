//! Integer grid points and cardinal movement.

use crate::action::Movement;
use std::fmt;
use std::ops::Add;

/// A point on the board, `x` growing rightward and `y` growing upward.
///
/// Also used as a relative offset (manipulator arms are stored as offsets
/// from the robot). The derived `Ord` compares `x` then `y`; that order is
/// the canonical tie-break used by the navigation layer.
///
/// # Examples
///
/// ```
/// use wrapsim_core::Point;
///
/// let p = Point::new(2, 3);
/// assert_eq!(p.up(), Point::new(2, 4));
/// assert_eq!(p + Point::new(1, -1), Point::new(3, 2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one cell above.
    pub const fn up(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// The point one cell below.
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// The point one cell to the left.
    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// The point one cell to the right.
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// The point one cell away in the given movement direction.
    pub const fn step(self, movement: Movement) -> Self {
        match movement {
            Movement::Up => self.up(),
            Movement::Down => self.down(),
            Movement::Left => self.left(),
            Movement::Right => self.right(),
        }
    }

    /// Rotate this offset 90° clockwise about the origin: `(x, y) -> (y, -x)`.
    pub const fn rotate_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotate this offset 90° counter-clockwise about the origin:
    /// `(x, y) -> (-y, x)`.
    pub const fn rotate_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// The four cardinal neighbours with the movement that reaches each,
    /// in the fixed order Up, Down, Right, Left.
    pub fn neighbors(self) -> [(Point, Movement); 4] {
        [
            (self.up(), Movement::Up),
            (self.down(), Movement::Down),
            (self.right(), Movement::Right),
            (self.left(), Movement::Left),
        ]
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, offset: Point) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_after_four_turns() {
        let p = Point::new(1, -1);
        assert_eq!(p.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), p);
        assert_eq!(p.rotate_cw().rotate_ccw(), p);
    }

    #[test]
    fn rotate_cw_maps_up_arm_to_right() {
        // An arm pointing up (0, 1) swings to the right (1, 0).
        assert_eq!(Point::new(0, 1).rotate_cw(), Point::new(1, 0));
        assert_eq!(Point::new(1, 0).rotate_cw(), Point::new(0, -1));
    }

    #[test]
    fn neighbors_are_the_four_cardinal_cells() {
        let n = Point::new(3, 3).neighbors();
        assert_eq!(n[0], (Point::new(3, 4), Movement::Up));
        assert_eq!(n[1], (Point::new(3, 2), Movement::Down));
        assert_eq!(n[2], (Point::new(4, 3), Movement::Right));
        assert_eq!(n[3], (Point::new(2, 3), Movement::Left));
    }

    #[test]
    fn ord_compares_x_then_y() {
        assert!(Point::new(0, 9) < Point::new(1, 0));
        assert!(Point::new(1, 0) < Point::new(1, 1));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn four_rotations_are_the_identity(x in -10_000i32..10_000, y in -10_000i32..10_000) {
                let p = Point::new(x, y);
                prop_assert_eq!(p.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), p);
                prop_assert_eq!(p.rotate_ccw().rotate_cw(), p);
            }

            #[test]
            fn every_neighbor_is_one_step_away(x in -10_000i32..10_000, y in -10_000i32..10_000) {
                let p = Point::new(x, y);
                for (neighbor, movement) in p.neighbors() {
                    prop_assert_eq!(p.step(movement), neighbor);
                }
            }
        }
    }
}
