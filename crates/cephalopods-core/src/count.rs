//! Multiplicities counted modulo 2³⁰.

use std::{
    fmt::{self, Display},
    iter::Sum,
    ops::{Add, AddAssign, Mul},
};

/// The scoring modulus, 2³⁰.
pub const MODULUS: u32 = 1 << 30;

const MASK: u32 = MODULUS - 1;

/// A non-negative integer reduced modulo [`MODULUS`].
///
/// Used both for the number of paths reaching a board and for the
/// accumulated score. Addition and multiplication wrap at 2³⁰, which is
/// the puzzle's scoring convention rather than an overflow.
///
/// # Examples
///
/// ```
/// use cephalopods_core::{Count, count::MODULUS};
///
/// let almost = Count::new(MODULUS - 1);
/// assert_eq!(almost + Count::ONE, Count::ZERO);
/// assert_eq!((Count::new(3) * Count::new(1 << 29)).value(), 1 << 29);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Count(u32);

impl Count {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One.
    pub const ONE: Self = Self(1);

    /// Creates a count, reducing `value` modulo [`MODULUS`].
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value & MASK)
    }

    /// Returns the reduced value, always below [`MODULUS`].
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` if the count is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Count {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // Both operands are below 2³⁰, so the sum fits in a u32.
        Self((self.0 + rhs.0) & MASK)
    }
}

impl AddAssign for Count {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for Count {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let product = u64::from(self.0) * u64::from(rhs.0);
        #[expect(clippy::cast_possible_truncation)]
        let reduced = (product & u64::from(MASK)) as u32;
        Self(reduced)
    }
}

impl Sum for Count {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Count> for u32 {
    fn from(count: Count) -> u32 {
        count.value()
    }
}
