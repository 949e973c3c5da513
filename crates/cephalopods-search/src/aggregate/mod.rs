//! Deduplicating aggregation of weighted boards.
//!
//! Every breadth-first layer produces a multiset of `(board, weight)`
//! pairs. An [`Aggregator`] merges pairs with the same board by adding
//! their weights, so the next [`Frontier`] holds each board exactly once.
//!
//! Two interchangeable strategies are provided:
//!
//! - [`HashAggregator`]: open addressing with linear probing; merges on
//!   insert.
//! - [`SortMergeAggregator`]: buffers pairs, then radix-sorts them by the
//!   packed board and merges runs of equal keys.
//!
//! Both produce the same multiset of merged entries; only the order of the
//! drained frontier differs.

use std::{fmt::Debug, ops::AddAssign};

use cephalopods_core::{Board, Count, OrbitCounts};

use crate::SearchError;

pub use self::{hash_table::HashAggregator, sort_merge::SortMergeAggregator};

mod hash_table;
mod sort_merge;

/// A multiplicity that can be merged by addition.
///
/// Implemented by the scalar [`Count`] and by the per-symmetry
/// [`OrbitCounts`].
pub trait Weight: Copy + PartialEq + Debug + AddAssign + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;
}

impl Weight for Count {
    const ZERO: Self = Count::ZERO;
}

impl Weight for OrbitCounts {
    const ZERO: Self = OrbitCounts::ZERO;
}

/// Collects weighted boards and merges equal boards.
pub trait Aggregator<W: Weight>: Send {
    /// Adds `weight` to the entry for `board`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::OutOfMemory`] if the storage cannot grow.
    fn insert(&mut self, board: Board, weight: W) -> Result<(), SearchError>;

    /// Returns the number of entries currently held.
    ///
    /// For strategies that merge lazily this counts pending pairs, which
    /// may include duplicates.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the merged entries into `frontier`, replacing its contents.
    ///
    /// The aggregator is left empty but keeps its storage for the next layer.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::OutOfMemory`] if `frontier` or scratch
    /// storage cannot grow.
    fn drain_into(&mut self, frontier: &mut Frontier<W>) -> Result<(), SearchError>;

    /// Discards every entry, keeping the storage.
    fn reset(&mut self);
}

/// The set of distinct boards, with their weights, at one search depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontier<W> {
    entries: Vec<(Board, W)>,
}

impl<W: Weight> Frontier<W> {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a frontier holding a single board.
    #[must_use]
    pub fn single(board: Board, weight: W) -> Self {
        Self {
            entries: vec![(board, weight)],
        }
    }

    /// Returns the entries.
    #[must_use]
    pub fn entries(&self) -> &[(Board, W)] {
        &self.entries
    }

    /// Returns the number of boards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the frontier holds no boards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every board, keeping the storage.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the weight stored for `board`, if present.
    #[must_use]
    pub fn get(&self, board: Board) -> Option<W> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == board)
            .map(|&(_, weight)| weight)
    }

    /// Sorts the entries by packed board.
    pub fn sort_by_board(&mut self) {
        self.entries.sort_unstable_by_key(|&(board, _)| board);
    }

    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), SearchError> {
        self.entries.try_reserve(additional)?;
        Ok(())
    }

    pub(crate) fn push(&mut self, board: Board, weight: W) {
        self.entries.push((board, weight));
    }
}

impl<W: Weight> Default for Frontier<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, W> IntoIterator for &'a Frontier<W> {
    type Item = &'a (Board, W);
    type IntoIter = std::slice::Iter<'a, (Board, W)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board(i: u32) -> Board {
        // Spread keys over all nine fields, keeping every field within 0-6.
        let values: [u8; 9] = std::array::from_fn(|cell| {
            u8::try_from((i / 7_u32.pow(u32::try_from(cell).unwrap())) % 7).unwrap()
        });
        Board::from_values(values).unwrap()
    }

    fn drain<A: Aggregator<Count>>(aggregator: &mut A) -> Vec<(Board, Count)> {
        let mut frontier = Frontier::new();
        aggregator.drain_into(&mut frontier).unwrap();
        frontier.sort_by_board();
        frontier.entries().to_vec()
    }

    fn aggregate<A: Aggregator<Count>>(mut aggregator: A, pairs: &[(Board, Count)]) -> Vec<(Board, Count)> {
        for &(board, weight) in pairs {
            aggregator.insert(board, weight).unwrap();
        }
        drain(&mut aggregator)
    }

    fn reference(pairs: &[(Board, Count)]) -> Vec<(Board, Count)> {
        let mut merged = std::collections::BTreeMap::new();
        for &(board, weight) in pairs {
            *merged.entry(board).or_insert(Count::ZERO) += weight;
        }
        merged.into_iter().collect()
    }

    fn pairs_strategy() -> impl Strategy<Value = Vec<(Board, Count)>> {
        // A small key range forces plenty of duplicates.
        prop::collection::vec((0..200_u32, any::<u32>()), 0..400).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(key, weight)| (board(key * 4099 % 40_353_607), Count::new(weight)))
                .collect()
        })
    }

    #[test]
    fn test_merges_duplicates_modulo() {
        let pairs = [
            (board(5), Count::new((1 << 30) - 1)),
            (board(9), Count::new(7)),
            (board(5), Count::new(3)),
            (Board::EMPTY, Count::ONE),
        ];
        let expected = vec![
            (Board::EMPTY, Count::ONE),
            (board(5), Count::new(2)),
            (board(9), Count::new(7)),
        ];
        assert_eq!(aggregate(HashAggregator::new(), &pairs), expected);
        assert_eq!(aggregate(SortMergeAggregator::new(), &pairs), expected);
    }

    #[test]
    fn test_storage_is_reusable_after_drain_and_reset() {
        fn check<A: Aggregator<Count>>(mut aggregator: A) {
            aggregator.insert(board(1), Count::ONE).unwrap();
            aggregator.reset();
            assert!(aggregator.is_empty());

            aggregator.insert(board(2), Count::ONE).unwrap();
            aggregator.insert(board(2), Count::ONE).unwrap();
            assert_eq!(drain(&mut aggregator), [(board(2), Count::new(2))]);
            assert!(aggregator.is_empty());

            aggregator.insert(board(3), Count::ONE).unwrap();
            assert_eq!(drain(&mut aggregator), [(board(3), Count::ONE)]);
        }
        check(HashAggregator::<Count>::new());
        check(SortMergeAggregator::<Count>::new());
    }

    #[test]
    fn test_orbit_weights() {
        let mut aggregator = HashAggregator::<OrbitCounts>::new();
        let a = OrbitCounts::single(Count::new(2));
        let b = OrbitCounts::single(Count::new(5));
        aggregator.insert(board(4), a).unwrap();
        aggregator.insert(board(4), b).unwrap();
        let mut frontier = Frontier::new();
        aggregator.drain_into(&mut frontier).unwrap();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.get(board(4)), Some(OrbitCounts::single(Count::new(7))));
    }

    #[test]
    fn test_drain_replaces_frontier_contents() {
        let mut frontier = Frontier::single(board(8), Count::ONE);
        let mut aggregator = SortMergeAggregator::new();
        aggregator.insert(board(9), Count::ONE).unwrap();
        aggregator.drain_into(&mut frontier).unwrap();
        assert_eq!(frontier.entries(), [(board(9), Count::ONE)]);
    }

    proptest! {
        #[test]
        fn prop_strategies_match_reference(pairs in pairs_strategy()) {
            let expected = reference(&pairs);
            prop_assert_eq!(aggregate(HashAggregator::new(), &pairs), expected.clone());
            prop_assert_eq!(aggregate(SortMergeAggregator::new(), &pairs), expected);
        }

        #[test]
        fn prop_order_independent(shuffled in pairs_strategy().prop_flat_map(|pairs| {
            let original = Just(pairs.clone());
            (original, Just(pairs).prop_shuffle())
        })) {
            let (original, shuffled) = shuffled;
            prop_assert_eq!(
                aggregate(HashAggregator::new(), &original),
                aggregate(HashAggregator::new(), &shuffled)
            );
            prop_assert_eq!(
                aggregate(SortMergeAggregator::new(), &original),
                aggregate(SortMergeAggregator::new(), &shuffled)
            );
        }
    }
}
