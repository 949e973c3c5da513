//! Move and capture generation.
//!
//! Every empty cell is a possible target. A target whose occupied neighbors
//! include a subset of two or more dice summing to at most 6 offers one
//! capturing move per such subset; otherwise the only move places a 1.
//! Moves on different targets, and different captures on the same target,
//! are independent successors; identical resulting boards are merged later
//! by the aggregator, never here.
//!
//! # Examples
//!
//! ```
//! use cephalopods_core::Board;
//! use cephalopods_search::moves;
//!
//! let board: Board = "616 101 616".parse()?;
//! // Every 2-, 3- and 4-subset of the four 1s around the center is a capture.
//! assert_eq!(moves::successors(board).len(), 11);
//! # Ok::<(), cephalopods_core::BoardError>(())
//! ```

use std::fmt::{self, Display};

use cephalopods_core::{Board, Cell, Die};
use tinyvec::ArrayVec;

/// Upper bound on the successors of a single board.
///
/// Corners admit at most one capture, edge centers four, and the center
/// eleven: `4 × 1 + 4 × 4 + 11 = 31`.
pub const MAX_SUCCESSORS: usize = 32;

/// Successor boards of one board, stored inline.
pub type Successors = ArrayVec<[Board; MAX_SUCCESSORS]>;

/// A single legal move: a die placed on an empty cell, optionally
/// capturing neighboring dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    target: Cell,
    die: Die,
    captured: u16,
}

impl Move {
    /// Returns the cell receiving the die.
    #[must_use]
    pub fn target(&self) -> Cell {
        self.target
    }

    /// Returns the placed die.
    ///
    /// For a capture this is the sum of the captured dice; otherwise it is 1.
    #[must_use]
    pub fn die(&self) -> Die {
        self.die
    }

    /// Returns `true` if the move captures neighboring dice.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured != 0
    }

    /// Returns the captured cells in ascending order.
    pub fn captured(&self) -> impl Iterator<Item = Cell> + use<> {
        let captured = self.captured;
        Cell::ALL
            .into_iter()
            .filter(move |cell| captured & (1 << cell.index()) != 0)
    }

    /// Returns the board after playing this move on `board`.
    #[must_use]
    pub fn apply(&self, board: Board) -> Board {
        self.captured()
            .fold(board, Board::clear)
            .place(self.target, self.die)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.die, self.target)?;
        if self.is_capture() {
            f.write_str(" capturing")?;
            for cell in self.captured() {
                write!(f, " {cell}")?;
            }
        }
        Ok(())
    }
}

/// Calls `visit` for every legal move on `board`.
///
/// Targets are visited in ascending cell order; captures on one target in
/// ascending subset-mask order over its occupied neighbors.
///
/// `board` must not be full: full boards are terminal and never expanded.
pub fn for_each_move(board: Board, mut visit: impl FnMut(Move)) {
    debug_assert!(!board.is_full(), "full board {board} must not be expanded");

    for target in board.empty_cells() {
        let mut occupied = [(target, 0); 4];
        let mut len = 0;
        for &neighbor in target.neighbors() {
            let value = board.get(neighbor);
            if value != 0 {
                occupied[len] = (neighbor, value);
                len += 1;
            }
        }

        let mut captured_any = false;
        if len >= 2 {
            for subset in 0..(1_u8 << len) {
                if subset.count_ones() < 2 {
                    continue;
                }
                let (sum, captured) = occupied[..len]
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| subset & (1 << i) != 0)
                    .fold((0, 0_u16), |(sum, captured), (_, &(cell, value))| {
                        (sum + value, captured | (1 << cell.index()))
                    });
                // Occupied neighbors hold at least 1 each, so a 2+ subset sums to 2+.
                debug_assert!(sum >= 2);
                if let Some(die) = Die::try_from_value(sum) {
                    captured_any = true;
                    visit(Move {
                        target,
                        die,
                        captured,
                    });
                }
            }
        }

        if !captured_any {
            visit(Move {
                target,
                die: Die::D1,
                captured: 0,
            });
        }
    }
}

/// Returns every legal move on `board`.
///
/// `board` must not be full.
#[must_use]
pub fn legal_moves(board: Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for_each_move(board, |mv| moves.push(mv));
    moves
}

/// Returns the successor board of every legal move, duplicates included.
///
/// `board` must not be full.
#[must_use]
pub fn successors(board: Board) -> Successors {
    let mut successors = Successors::new();
    for_each_move(board, |mv| successors.push(mv.apply(board)));
    successors
}
