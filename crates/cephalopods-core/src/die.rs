//! Die values placed on the board.

use std::fmt::{self, Display};

/// A die value in the range 1-6.
///
/// Empty cells are not dice; they are represented by `0` in the packed
/// [`Board`](crate::Board) encoding and by `None` in [`Board::die`](crate::Board::die).
///
/// # Examples
///
/// ```
/// use cephalopods_core::Die;
///
/// assert_eq!(Die::from_value(4), Die::D4);
/// assert_eq!(Die::try_from_value(7), None);
/// assert_eq!(Die::D6.value(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Die {
    /// One pip.
    D1 = 1,
    /// Two pips.
    D2 = 2,
    /// Three pips.
    D3 = 3,
    /// Four pips.
    D4 = 4,
    /// Five pips.
    D5 = 5,
    /// Six pips.
    D6 = 6,
}

impl Die {
    /// All die values in ascending order.
    pub const ALL: [Self; 6] = [Self::D1, Self::D2, Self::D3, Self::D4, Self::D5, Self::D6];

    /// The largest die value; also the capture sum limit.
    pub const MAX: Self = Self::D6;

    /// Returns the die with the given value, or `None` outside 1-6.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            _ => None,
        }
    }

    /// Creates a die from a value in the range 1-6.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-6.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid die value: {value}"))
    }

    /// Returns the number of pips (1-6).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.value()
    }
}
