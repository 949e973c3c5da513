//! State spaces the search can walk.
//!
//! A [`StateSpace`] decides how boards are stored in the frontier and what
//! weight travels with them. [`ExactSpace`] stores every board as-is with a
//! scalar [`Count`]; [`SymmetricSpace`] stores one canonical board per
//! symmetry orbit with [`OrbitCounts`], shrinking the frontier up to eight
//! fold. Both produce the same final score.

use cephalopods_core::{Board, Count, OrbitCounts, canonicalize};

use crate::aggregate::Weight;

/// How boards and their weights are represented during the search.
pub trait StateSpace: Sync {
    /// Multiplicity carried by each stored board.
    type Weight: Weight;

    /// Returns the stored form of the initial board with one path.
    fn seed(&self, board: Board) -> (Board, Self::Weight);

    /// Returns the stored form of `successor`, reached from a parent
    /// carrying `parent` paths.
    fn successor(&self, successor: Board, parent: Self::Weight) -> (Board, Self::Weight);

    /// Returns the score contribution of a terminal stored board.
    fn terminal_score(&self, board: Board, weight: &Self::Weight) -> Count;

    /// Returns the total number of paths carried by `weight`.
    fn paths(&self, weight: &Self::Weight) -> Count;
}

/// Every board is stored verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactSpace;

impl StateSpace for ExactSpace {
    type Weight = Count;

    fn seed(&self, board: Board) -> (Board, Count) {
        (board, Count::ONE)
    }

    #[inline]
    fn successor(&self, successor: Board, parent: Count) -> (Board, Count) {
        (successor, parent)
    }

    fn terminal_score(&self, board: Board, weight: &Count) -> Count {
        Count::new(board.score()) * *weight
    }

    fn paths(&self, weight: &Count) -> Count {
        *weight
    }
}

/// Boards are stored as the canonical member of their symmetry orbit.
///
/// A stored board `C` with counts `c` stands for `c[s]` paths to each
/// actual board `s.apply(C)`. Expanding `C` and reframing every successor
/// relative to its canonical image keeps that meaning intact, because the
/// move rules commute with every symmetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymmetricSpace;

impl StateSpace for SymmetricSpace {
    type Weight = OrbitCounts;

    fn seed(&self, board: Board) -> (Board, OrbitCounts) {
        let (canonical, symmetry) = canonicalize(board);
        (canonical, OrbitCounts::single(Count::ONE).reframe(symmetry))
    }

    #[inline]
    fn successor(&self, successor: Board, parent: OrbitCounts) -> (Board, OrbitCounts) {
        let (canonical, symmetry) = canonicalize(successor);
        (canonical, parent.reframe(symmetry))
    }

    fn terminal_score(&self, board: Board, weight: &OrbitCounts) -> Count {
        weight.weighted_score(board)
    }

    fn paths(&self, weight: &OrbitCounts) -> Count {
        weight.total()
    }
}

#[cfg(test)]
mod tests {
    use cephalopods_core::Symmetry;
    use proptest::prelude::*;

    use super::*;
    use crate::moves;

    fn board_strategy() -> impl Strategy<Value = Board> {
        prop::array::uniform9(0..=6u8).prop_map(|values| Board::from_values(values).unwrap())
    }

    #[test]
    fn test_exact_space() {
        let board: Board = "123 456 123".parse().unwrap();
        assert_eq!(ExactSpace.seed(board), (board, Count::ONE));
        assert_eq!(
            ExactSpace.terminal_score(board, &Count::new(2)),
            Count::new(2 * 123_456_123)
        );
    }

    #[test]
    fn test_symmetric_seed_scores_original_board() {
        let board: Board = "060 222 161".parse().unwrap();
        let (canonical, counts) = SymmetricSpace.seed(board);
        assert_eq!(canonical, canonicalize(board).0);
        assert_eq!(SymmetricSpace.paths(&counts), Count::ONE);
        assert_eq!(
            SymmetricSpace.terminal_score(canonical, &counts),
            Count::new(board.score())
        );
    }

    proptest! {
        #[test]
        fn prop_symmetric_expansion_matches_exact(board in board_strategy(), s in (0..8u8).prop_map(Symmetry::from_index)) {
            prop_assume!(!board.is_full());
            // Pretend `board` is stored with one path to its image under `s`.
            let mut slots = [Count::ZERO; 8];
            slots[usize::from(s.index())] = Count::ONE;
            let parent = OrbitCounts::from_slots(slots);

            let exact: Count = moves::successors(s.apply(board))
                .iter()
                .map(|&successor| ExactSpace.terminal_score(successor, &Count::ONE))
                .sum();
            let symmetric: Count = moves::successors(board)
                .iter()
                .map(|&successor| {
                    let (stored, counts) = SymmetricSpace.successor(successor, parent);
                    SymmetricSpace.terminal_score(stored, &counts)
                })
                .sum();
            prop_assert_eq!(symmetric, exact);
        }
    }
}
