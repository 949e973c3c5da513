//! Radix sort + merge aggregation.

use cephalopods_core::Board;

use super::{Aggregator, Frontier, Weight};
use crate::SearchError;

// The 27-bit packed board is sorted in two counting-sort passes.
const LOW_BITS: u32 = 14;
const HIGH_BITS: u32 = 13;
const LOW_BUCKETS: usize = 1 << LOW_BITS;
const HIGH_BUCKETS: usize = 1 << HIGH_BITS;
const LOW_MASK: u32 = (1 << LOW_BITS) - 1;

/// Merges boards by buffering every pair, radix-sorting by packed board,
/// and summing runs of equal keys.
///
/// Sorting is a two-pass LSD counting sort (low 14 bits, then high 13
/// bits), so a layer of `n` pairs costs `O(n)` plus a fixed histogram
/// sweep. The pending and scratch buffers are kept across layers.
#[derive(Debug, Clone)]
pub struct SortMergeAggregator<W> {
    pending: Vec<(Board, W)>,
    scratch: Vec<(Board, W)>,
    histogram: Vec<usize>,
}

impl<W: Weight> SortMergeAggregator<W> {
    /// Creates an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            scratch: Vec::new(),
            histogram: Vec::new(),
        }
    }

    /// Sorts `pending` by packed board, leaving the result in `pending`.
    fn radix_sort(&mut self) -> Result<(), SearchError> {
        let n = self.pending.len();
        if n < 2 {
            return Ok(());
        }
        if self.histogram.is_empty() {
            self.histogram.try_reserve_exact(LOW_BUCKETS)?;
            self.histogram.resize(LOW_BUCKETS, 0);
        }
        self.scratch.clear();
        self.scratch.try_reserve(n)?;
        self.scratch.resize(n, (Board::EMPTY, W::ZERO));

        scatter(
            &self.pending,
            &mut self.scratch,
            &mut self.histogram[..LOW_BUCKETS],
            |raw| (raw & LOW_MASK) as usize,
        );
        scatter(
            &self.scratch,
            &mut self.pending,
            &mut self.histogram[..HIGH_BUCKETS],
            |raw| (raw >> LOW_BITS) as usize,
        );
        Ok(())
    }
}

/// One stable counting-sort pass from `src` into `dst`.
fn scatter<W: Copy>(
    src: &[(Board, W)],
    dst: &mut [(Board, W)],
    histogram: &mut [usize],
    bucket: impl Fn(u32) -> usize,
) {
    histogram.fill(0);
    for (board, _) in src {
        histogram[bucket(board.raw())] += 1;
    }

    let mut sum = 0;
    for h in histogram.iter_mut() {
        let count = *h;
        *h = sum;
        sum += count;
    }

    for &(board, weight) in src {
        let b = bucket(board.raw());
        dst[histogram[b]] = (board, weight);
        histogram[b] += 1;
    }
}

impl<W: Weight> Default for SortMergeAggregator<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Aggregator<W> for SortMergeAggregator<W> {
    fn insert(&mut self, board: Board, weight: W) -> Result<(), SearchError> {
        self.pending.try_reserve(1)?;
        self.pending.push((board, weight));
        Ok(())
    }

    fn len(&self) -> usize {
        self.pending.len()
    }

    fn drain_into(&mut self, frontier: &mut Frontier<W>) -> Result<(), SearchError> {
        self.radix_sort()?;

        frontier.clear();
        let mut runs = self.pending.drain(..);
        let Some(mut current) = runs.next() else {
            return Ok(());
        };
        for (board, weight) in runs {
            if board == current.0 {
                current.1 += weight;
            } else {
                frontier.reserve(1)?;
                frontier.push(current.0, current.1);
                current = (board, weight);
            }
        }
        frontier.reserve(1)?;
        frontier.push(current.0, current.1);
        Ok(())
    }

    fn reset(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use cephalopods_core::Count;

    use super::*;

    #[test]
    fn test_radix_sort_orders_by_packed_board() {
        let raws = [0o654_321_000, 0o000_000_001, 0o000_100_000, 0o000_000_001, 0o666_666_666, 0];
        let mut aggregator = SortMergeAggregator::new();
        for raw in raws {
            aggregator.insert(Board::try_from_raw(raw).unwrap(), Count::ONE).unwrap();
        }
        aggregator.radix_sort().unwrap();
        let sorted: Vec<_> = aggregator.pending.iter().map(|(board, _)| board.raw()).collect();
        let mut expected = raws.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_drained_frontier_is_sorted_and_merged() {
        let a: Board = "100 000 000".parse().unwrap();
        let b: Board = "000 000 001".parse().unwrap();
        let mut aggregator = SortMergeAggregator::new();
        aggregator.insert(a, Count::new(1)).unwrap();
        aggregator.insert(b, Count::new(2)).unwrap();
        aggregator.insert(a, Count::new(3)).unwrap();
        let mut frontier = Frontier::new();
        aggregator.drain_into(&mut frontier).unwrap();
        assert_eq!(frontier.entries(), [(a, Count::new(4)), (b, Count::new(2))]);
        assert!(aggregator.is_empty());
    }

    #[test]
    fn test_drain_empty() {
        let mut aggregator = SortMergeAggregator::<Count>::new();
        let mut frontier = Frontier::single(Board::EMPTY, Count::ONE);
        aggregator.drain_into(&mut frontier).unwrap();
        assert!(frontier.is_empty());
    }
}
