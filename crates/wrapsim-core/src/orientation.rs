//! Robot facing direction.

/// The direction a robot faces.
///
/// Rotated by the turn actions together with the manipulator arm offsets.
/// Robots spawn facing [`Orientation::Right`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Facing up (+y).
    Up,
    /// Facing down (-y).
    Down,
    /// Facing left (-x).
    Left,
    /// Facing right (+x).
    #[default]
    Right,
}

impl Orientation {
    /// The orientation after a 90° clockwise turn.
    pub const fn turn_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// The orientation after a 90° counter-clockwise turn.
    pub const fn turn_counter_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }
}
