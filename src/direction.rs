/*!
Direction bitmask for scroll requests.

Bit layout (matches the joystick port order the input layer produces):
  +X (right) bit 0, -X (left) bit 1, +Y (down) bit 2, -Y (up) bit 3.

Diagonals combine one X bit with one Y bit. A mask naming both directions
on the same axis (e.g. +X and -X together, as happens when keyboard and
joystick disagree) cancels that axis: `normalized()` clears the pair and
the scroll controller always works on the normalized mask.
*/

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    XPlus,
    XMinus,
    YPlus,
    YMinus,
}

impl Step {
    #[inline]
    fn mask(self) -> u8 {
        match self {
            Step::XPlus => Direction::X_PLUS.0,
            Step::XMinus => Direction::X_MINUS.0,
            Step::YPlus => Direction::Y_PLUS.0,
            Step::YMinus => Direction::Y_MINUS.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Direction(u8);

impl Direction {
    pub const NONE: Direction = Direction(0x00);
    pub const X_PLUS: Direction = Direction(0x01);
    pub const X_MINUS: Direction = Direction(0x02);
    pub const Y_PLUS: Direction = Direction(0x04);
    pub const Y_MINUS: Direction = Direction(0x08);

    pub const X_PLUS_Y_PLUS: Direction = Direction(0x05);
    pub const X_MINUS_Y_MINUS: Direction = Direction(0x0A);
    pub const X_PLUS_Y_MINUS: Direction = Direction(0x09);
    pub const X_MINUS_Y_PLUS: Direction = Direction(0x06);

    const X_AXIS: u8 = 0x03;
    const Y_AXIS: u8 = 0x0C;

    /// Build from raw bits; bits above the low nibble are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Direction(bits & 0x0F)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn contains(self, step: Step) -> bool {
        self.0 & step.mask() != 0
    }

    #[inline]
    pub fn with(self, step: Step) -> Self {
        Direction(self.0 | step.mask())
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Clear any axis on which both directions are set.
    pub fn normalized(self) -> Self {
        let mut bits = self.0;
        if bits & Self::X_AXIS == Self::X_AXIS {
            bits &= !Self::X_AXIS;
        }
        if bits & Self::Y_AXIS == Self::Y_AXIS {
            bits &= !Self::Y_AXIS;
        }
        Direction(bits)
    }

    /// Horizontal component after normalization: `Some(true)` = +X.
    pub fn x_sign(self) -> Option<bool> {
        match self.normalized().0 & Self::X_AXIS {
            0x01 => Some(true),
            0x02 => Some(false),
            _ => None,
        }
    }

    /// Vertical component after normalization: `Some(true)` = +Y.
    pub fn y_sign(self) -> Option<bool> {
        match self.normalized().0 & Self::Y_AXIS {
            0x04 => Some(true),
            0x08 => Some(false),
            _ => None,
        }
    }
}

impl std::ops::BitOr for Direction {
    type Output = Direction;

    fn bitor(self, rhs: Direction) -> Direction {
        Direction(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Direction {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.0 |= rhs.0;
    }
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        Direction(step.mask())
    }
}
