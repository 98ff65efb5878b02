//! Discrete joystick directions and the axis-pair lookup table.

/// Ternary deflection of a single axis relative to its dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisFlag {
    /// Reading below the low threshold (left on X, down on Y).
    Negative,
    /// Reading inside the dead zone.
    Centered,
    /// Reading above the high threshold (right on X, up on Y).
    Positive,
}

impl AxisFlag {
    /// Signed value of the flag: -1, 0 or +1.
    pub fn value(self) -> i8 {
        match self {
            AxisFlag::Negative => -1,
            AxisFlag::Centered => 0,
            AxisFlag::Positive => 1,
        }
    }

    /// Row/column index into [`DIRECTION_TABLE`].
    fn index(self) -> usize {
        match self {
            AxisFlag::Negative => 0,
            AxisFlag::Centered => 1,
            AxisFlag::Positive => 2,
        }
    }
}

/// One of the nine discrete joystick positions.
///
/// The discriminants are stable and used by
/// [`SharedJoystickState`](crate::SharedJoystickState) to store the current
/// direction in an atomic byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    #[default]
    Center = 0,
    Up = 1,
    RightUp = 2,
    Right = 3,
    RightDown = 4,
    Down = 5,
    LeftDown = 6,
    Left = 7,
    LeftUp = 8,
}

/// Direction lookup indexed as `DIRECTION_TABLE[x][y]`, where each index is
/// 0 for a negative, 1 for a centered and 2 for a positive axis flag.
pub const DIRECTION_TABLE: [[Direction; 3]; 3] = [
    // x = -1
    [Direction::LeftDown, Direction::Left, Direction::LeftUp],
    // x = 0
    [Direction::Down, Direction::Center, Direction::Up],
    // x = +1
    [Direction::RightDown, Direction::Right, Direction::RightUp],
];

impl Direction {
    /// All nine directions in discriminant order.
    pub const ALL: [Direction; 9] = [
        Direction::Center,
        Direction::Up,
        Direction::RightUp,
        Direction::Right,
        Direction::RightDown,
        Direction::Down,
        Direction::LeftDown,
        Direction::Left,
        Direction::LeftUp,
    ];

    /// Combine the two axis flags into a direction.
    pub fn from_flags(x: AxisFlag, y: AxisFlag) -> Self {
        DIRECTION_TABLE[x.index()][y.index()]
    }

    /// Inverse of `self as u8`. Returns `None` for values above 8.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Returns `true` for every direction except [`Direction::Center`].
    pub fn is_deflected(self) -> bool {
        self != Direction::Center
    }
}
