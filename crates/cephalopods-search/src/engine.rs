//! The breadth-first search driver.
//!
//! Starting from the initial board, each turn processes the whole frontier:
//! boards that are full, or that sit at the final turn, are terminal and add
//! `score × multiplicity` to the result; every other board is expanded and
//! its successors are merged into the next frontier. The loop stops after
//! the final turn or as soon as the frontier becomes empty.

use std::ops::AddAssign;

use cephalopods_core::{Board, Count};
use rayon::prelude::*;

use crate::{
    SearchConfig, SearchError,
    aggregate::{Aggregator, Frontier, HashAggregator},
    moves,
    space::StateSpace,
    stats::{LayerStats, SearchStats},
};

/// Smallest number of stored boards handed to one parallel task.
const MIN_PARALLEL_CHUNK: usize = 1024;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Sum of `score × multiplicity` over terminal boards, modulo 2³⁰.
    pub score: Count,
    /// Per-layer statistics.
    pub stats: SearchStats,
}

/// Counters accumulated while processing one layer.
#[derive(Debug, Clone, Copy, Default)]
struct LayerTally {
    expanded: usize,
    terminal: usize,
    successors: usize,
    paths: Count,
    score: Count,
}

impl AddAssign for LayerTally {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.terminal += rhs.terminal;
        self.successors += rhs.successors;
        self.paths += rhs.paths;
        self.score += rhs.score;
    }
}

/// A breadth-first search over a [`StateSpace`], merging each layer with an
/// [`Aggregator`].
///
/// The engine owns its aggregator and frontier buffers so repeated runs
/// reuse their storage.
#[derive(Debug)]
pub struct SearchEngine<S: StateSpace, A> {
    space: S,
    aggregator: A,
    frontier: Frontier<S::Weight>,
    config: SearchConfig,
}

impl<S, A> SearchEngine<S, A>
where
    S: StateSpace,
    A: Aggregator<S::Weight>,
{
    /// Creates an engine.
    #[must_use]
    pub fn new(space: S, aggregator: A, config: SearchConfig) -> Self {
        Self {
            space,
            aggregator,
            frontier: Frontier::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Enumerates every game of up to `depth` turns from `initial` and
    /// returns the accumulated score.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::FrontierLimit`] if a layer exceeds the
    /// configured limit, or [`SearchError::OutOfMemory`] if storage cannot
    /// grow.
    pub fn run(&mut self, initial: Board, depth: u32) -> Result<SearchOutcome, SearchError> {
        self.aggregator.reset();
        self.frontier.clear();
        let (board, weight) = self.space.seed(initial);
        self.frontier.reserve(1)?;
        self.frontier.push(board, weight);

        let mut score = Count::ZERO;
        let mut stats = SearchStats::default();
        for turn in 0..=depth {
            let last = turn == depth;
            let frontier_len = self.frontier.len();
            let tally = if self.config.parallel() && !last {
                self.expand_parallel()?
            } else {
                self.expand_sequential(last)?
            };
            score += tally.score;

            let layer = LayerStats {
                turn,
                frontier: frontier_len,
                expanded: tally.expanded,
                terminal: tally.terminal,
                successors: tally.successors,
                paths: tally.paths,
            };
            log::debug!("{layer}");
            stats.push(layer);

            if self.frontier.is_empty() {
                break;
            }
            if let Some(limit) = self.config.max_frontier()
                && self.frontier.len() > limit
            {
                return Err(SearchError::FrontierLimit {
                    turn: turn + 1,
                    len: self.frontier.len(),
                    limit,
                });
            }
        }

        log::info!(
            "search of depth {depth} from {initial} finished: score {score}, peak frontier {}",
            stats.peak_frontier()
        );
        Ok(SearchOutcome { score, stats })
    }

    /// Processes the current frontier on this thread and replaces it with
    /// the next one.
    fn expand_sequential(&mut self, last: bool) -> Result<LayerTally, SearchError> {
        let mut tally = LayerTally::default();
        for &(board, weight) in &self.frontier {
            expand_entry(&self.space, board, weight, last, &mut self.aggregator, &mut tally)?;
        }
        self.aggregator.drain_into(&mut self.frontier)?;
        Ok(tally)
    }

    /// Processes the current frontier in parallel chunks, each merging into
    /// its own hash table, then combines the tables into the next frontier.
    ///
    /// Never used for the final turn, which only scores.
    fn expand_parallel(&mut self) -> Result<LayerTally, SearchError> {
        let space = &self.space;
        let chunk_len =
            (self.frontier.len() / (rayon::current_num_threads() * 4)).max(MIN_PARALLEL_CHUNK);
        let (tally, mut merged) = self
            .frontier
            .entries()
            .par_chunks(chunk_len)
            .map(|chunk| {
                let mut local = HashAggregator::<S::Weight>::new();
                let mut tally = LayerTally::default();
                for &(board, weight) in chunk {
                    expand_entry(space, board, weight, false, &mut local, &mut tally)?;
                }
                Ok::<_, SearchError>((tally, local))
            })
            .try_reduce(
                || (LayerTally::default(), HashAggregator::new()),
                |(mut tally, mut a), (other_tally, mut b)| {
                    tally += other_tally;
                    if a.len() < b.len() {
                        std::mem::swap(&mut a, &mut b);
                    }
                    a.merge(&b)?;
                    Ok((tally, a))
                },
            )?;
        merged.drain_into(&mut self.frontier)?;
        Ok(tally)
    }
}

/// Scores or expands one stored board.
fn expand_entry<S, A>(
    space: &S,
    board: Board,
    weight: S::Weight,
    last: bool,
    aggregator: &mut A,
    tally: &mut LayerTally,
) -> Result<(), SearchError>
where
    S: StateSpace,
    A: Aggregator<S::Weight>,
{
    tally.paths += space.paths(&weight);
    if last || board.is_full() {
        tally.terminal += 1;
        tally.score += space.terminal_score(board, &weight);
        return Ok(());
    }

    let successors = moves::successors(board);
    debug_assert!(!successors.is_empty(), "non-full board {board} has no successors");
    tally.expanded += 1;
    tally.successors += successors.len();
    for successor in successors {
        let (stored, weight) = space.successor(successor, weight);
        aggregator.insert(stored, weight)?;
    }
    Ok(())
}
