//! The eight symmetries of the square and board canonicalization.
//!
//! Capture rules only depend on orthogonal adjacency, which every symmetry
//! of the square preserves. Boards related by a symmetry therefore have
//! successor sets related by the same symmetry, and a search can track one
//! canonical representative per orbit (see [`OrbitCounts`](crate::OrbitCounts)).
//!
//! # Examples
//!
//! ```
//! use cephalopods_core::{Board, Symmetry, canonicalize};
//!
//! let board: Board = "100 000 000".parse()?;
//! let rotated = Symmetry::RotateClockwise.apply(board);
//! assert_eq!(rotated.to_string(), "001 000 000");
//!
//! let (canonical, symmetry) = canonicalize(rotated);
//! assert_eq!(symmetry.apply(rotated), canonical);
//! assert_eq!(canonicalize(board).0, canonical);
//! # Ok::<(), cephalopods_core::BoardError>(())
//! ```

use crate::{Board, Cell};

/// A symmetry of the square, acting on boards by moving cells.
///
/// The discriminant is the symmetry's index (0-7), used to address
/// [`OrbitCounts`](crate::OrbitCounts) slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symmetry {
    /// Leaves the board unchanged.
    Identity = 0,
    /// Mirror across the vertical axis (swaps the left and right columns).
    MirrorVertical = 1,
    /// Mirror across the horizontal axis (swaps the top and bottom rows).
    MirrorHorizontal = 2,
    /// Both mirrors, i.e. a half turn.
    Rotate180 = 3,
    /// Mirror across the main diagonal.
    Transpose = 4,
    /// Mirror across the anti-diagonal.
    AntiTranspose = 5,
    /// Quarter turn clockwise.
    RotateClockwise = 6,
    /// Quarter turn counterclockwise.
    RotateCounterclockwise = 7,
}

/// For each symmetry, the source cell of every destination cell.
const SOURCES: [[usize; 9]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [2, 1, 0, 5, 4, 3, 8, 7, 6],
    [6, 7, 8, 3, 4, 5, 0, 1, 2],
    [8, 7, 6, 5, 4, 3, 2, 1, 0],
    [0, 3, 6, 1, 4, 7, 2, 5, 8],
    [8, 5, 2, 7, 4, 1, 6, 3, 0],
    [6, 3, 0, 7, 4, 1, 8, 5, 2],
    [2, 5, 8, 1, 4, 7, 0, 3, 6],
];

/// `COMPOSITION[a][b]` is the symmetry equal to applying `a`, then `b`.
const COMPOSITION: [[Symmetry; 8]; 8] = {
    let mut table = [[Symmetry::Identity; 8]; 8];
    let mut a = 0;
    while a < 8 {
        let mut b = 0;
        while b < 8 {
            let mut composed = [0; 9];
            let mut i = 0;
            while i < 9 {
                composed[i] = SOURCES[a][SOURCES[b][i]];
                i += 1;
            }
            table[a][b] = Symmetry::from_sources(&composed);
            b += 1;
        }
        a += 1;
    }
    table
};

const INVERSE: [Symmetry; 8] = {
    let mut table = [Symmetry::Identity; 8];
    let mut a = 0;
    while a < 8 {
        let mut b = 0;
        while b < 8 {
            if matches!(COMPOSITION[a][b], Symmetry::Identity) {
                table[a] = Symmetry::ALL[b];
            }
            b += 1;
        }
        a += 1;
    }
    table
};

impl Symmetry {
    /// All symmetries in index order.
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::MirrorVertical,
        Self::MirrorHorizontal,
        Self::Rotate180,
        Self::Transpose,
        Self::AntiTranspose,
        Self::RotateClockwise,
        Self::RotateCounterclockwise,
    ];

    /// Returns the symmetry with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-7.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 8, "symmetry index must be 0-7");
        Self::ALL[index as usize]
    }

    /// Returns the index (0-7).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn from_sources(sources: &[usize; 9]) -> Self {
        let mut s = 0;
        while s < 8 {
            let mut i = 0;
            while i < 9 && SOURCES[s][i] == sources[i] {
                i += 1;
            }
            if i == 9 {
                return Self::ALL[s];
            }
            s += 1;
        }
        panic!("cell permutations are not closed under composition");
    }

    /// Returns the symmetry equal to applying `self`, then `next`.
    #[must_use]
    #[inline]
    pub const fn then(self, next: Self) -> Self {
        COMPOSITION[self as usize][next as usize]
    }

    /// Returns the symmetry that undoes `self`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        INVERSE[self as usize]
    }

    /// Returns the image of `board` under this symmetry.
    #[must_use]
    pub fn apply(self, board: Board) -> Board {
        if self == Self::Identity {
            return board;
        }
        let sources = &SOURCES[self as usize];
        Cell::ALL
            .into_iter()
            .zip(sources)
            .fold(Board::EMPTY, |image, (cell, &source)| {
                image.set(cell, board.get(Cell::ALL[source]))
            })
    }
}

/// Returns the canonical image of `board` and the symmetry that produces it.
///
/// The canonical image is the numerically smallest packed board among the
/// eight images. When several symmetries reach it, the one with the lowest
/// index wins.
#[must_use]
pub fn canonicalize(board: Board) -> (Board, Symmetry) {
    Symmetry::ALL[1..]
        .iter()
        .fold((board, Symmetry::Identity), |best, &symmetry| {
            let image = symmetry.apply(board);
            if image < best.0 {
                (image, symmetry)
            } else {
                best
            }
        })
}
