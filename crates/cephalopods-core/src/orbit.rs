//! Per-symmetry multiplicities attached to a canonical board.

use std::ops::{Add, AddAssign};

use crate::{Board, Count, Symmetry};

/// Eight multiplicities, one per symmetry, attached to a stored board.
///
/// Slot `s` counts the paths that reach the actual board `s.apply(stored)`.
/// The stored board is usually canonical; when a successor is re-expressed
/// relative to its own canonical image, the slots are permuted with
/// [`reframe`](Self::reframe).
///
/// # Examples
///
/// ```
/// use cephalopods_core::{Board, Count, OrbitCounts, Symmetry, canonicalize};
///
/// let board: Board = "001 000 000".parse()?;
/// let (canonical, symmetry) = canonicalize(board);
///
/// // One path reaches `board`; re-express it relative to `canonical`.
/// let counts = OrbitCounts::single(Count::ONE).reframe(symmetry);
/// assert_eq!(counts.total(), Count::ONE);
/// assert_eq!(counts.weighted_score(canonical), Count::new(board.score()));
/// # Ok::<(), cephalopods_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrbitCounts {
    counts: [Count; 8],
}

impl OrbitCounts {
    /// All slots zero.
    pub const ZERO: Self = Self {
        counts: [Count::ZERO; 8],
    };

    /// Counts `count` paths to the stored board itself (identity slot).
    #[must_use]
    pub const fn single(count: Count) -> Self {
        let mut counts = [Count::ZERO; 8];
        counts[0] = count;
        Self { counts }
    }

    /// Creates orbit counts from raw slots in symmetry index order.
    #[must_use]
    pub const fn from_slots(counts: [Count; 8]) -> Self {
        Self { counts }
    }

    /// Returns the slots in symmetry index order.
    #[must_use]
    pub const fn slots(&self) -> &[Count; 8] {
        &self.counts
    }

    /// Returns the count for the image under `symmetry`.
    #[must_use]
    pub const fn get(&self, symmetry: Symmetry) -> Count {
        self.counts[symmetry as usize]
    }

    /// Re-expresses counts attached to board `b` as counts attached to
    /// `canonical.apply(b)`.
    ///
    /// The new slot `t` takes the old slot `canonical.then(t)`, because
    /// `t.apply(canonical.apply(b))` is `canonical.then(t).apply(b)`.
    #[must_use]
    pub fn reframe(self, canonical: Symmetry) -> Self {
        if canonical == Symmetry::Identity {
            return self;
        }
        Self {
            counts: Symmetry::ALL.map(|t| self.get(canonical.then(t))),
        }
    }

    /// Returns the sum of all slots.
    #[must_use]
    pub fn total(&self) -> Count {
        self.counts.iter().copied().sum()
    }

    /// Returns `true` if every slot is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|count| count.is_zero())
    }

    /// Returns the sum of `score × count` over the eight actual boards.
    ///
    /// The score is digit-order sensitive, so each image of `board`
    /// generally contributes a different value.
    #[must_use]
    pub fn weighted_score(&self, board: Board) -> Count {
        Symmetry::ALL
            .into_iter()
            .zip(self.counts)
            .filter(|(_, count)| !count.is_zero())
            .map(|(symmetry, count)| Count::new(symmetry.apply(board).score()) * count)
            .sum()
    }
}

impl Add for OrbitCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for OrbitCounts {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (count, other) in self.counts.iter_mut().zip(rhs.counts) {
            *count += other;
        }
    }
}
