//! The closed set of booster items and their character codes.

use std::fmt;

/// A booster: either a collectible single-use item or a fixed board feature.
///
/// All variants except [`Booster::CloningLocation`] are picked into the
/// shared inventory when a robot enters their cell; a cloning location is
/// terrain and never leaves the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Booster {
    /// Grants one extra manipulator arm offset when attached.
    ExtraArm,
    /// Doubles movement distance for 50 turns when attached.
    FastWheels,
    /// Lets the robot bore through obstacles for 30 turns when started.
    Drill,
    /// Consumed to plant a teleport reset point.
    Teleporter,
    /// Board feature a robot must stand on to clone; never collectible.
    CloningLocation,
    /// Consumed to spawn a clone while standing on a cloning location.
    CloneToken,
}

impl Booster {
    /// Every booster, in canonical order.
    pub const ALL: [Booster; 6] = [
        Booster::ExtraArm,
        Booster::FastWheels,
        Booster::Drill,
        Booster::Teleporter,
        Booster::CloningLocation,
        Booster::CloneToken,
    ];

    /// Number of booster variants; sizes inventory tables.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index of this booster within [`Booster::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Booster::ExtraArm => 0,
            Booster::FastWheels => 1,
            Booster::Drill => 2,
            Booster::Teleporter => 3,
            Booster::CloningLocation => 4,
            Booster::CloneToken => 5,
        }
    }

    /// Whether a robot entering this booster's cell collects it.
    pub const fn can_pickup(self) -> bool {
        !matches!(self, Booster::CloningLocation)
    }

    /// Decode a booster from its character code, case-insensitively.
    ///
    /// Returns `None` for characters outside the booster alphabet. Note the
    /// board parser claims uppercase `X` for obstacles before consulting
    /// this table, so cloning locations are only reachable as lowercase `x`
    /// in board text.
    pub const fn from_char(code: char) -> Option<Booster> {
        match code {
            'B' | 'b' => Some(Booster::ExtraArm),
            'F' | 'f' => Some(Booster::FastWheels),
            'L' | 'l' => Some(Booster::Drill),
            'R' | 'r' => Some(Booster::Teleporter),
            'X' | 'x' => Some(Booster::CloningLocation),
            'C' | 'c' => Some(Booster::CloneToken),
            _ => None,
        }
    }

    /// The lowercase character code for this booster.
    pub const fn to_char(self) -> char {
        match self {
            Booster::ExtraArm => 'b',
            Booster::FastWheels => 'f',
            Booster::Drill => 'l',
            Booster::Teleporter => 'r',
            Booster::CloningLocation => 'x',
            Booster::CloneToken => 'c',
        }
    }
}

impl fmt::Display for Booster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Booster::ExtraArm => "ExtraArm",
            Booster::FastWheels => "FastWheels",
            Booster::Drill => "Drill",
            Booster::Teleporter => "Teleporter",
            Booster::CloningLocation => "CloningLocation",
            Booster::CloneToken => "CloneToken",
        };
        f.write_str(name)
    }
}
