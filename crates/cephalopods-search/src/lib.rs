//! Breadth-first enumeration of Cephalopods games.
//!
//! Given an initial board and a depth, the search plays every legal
//! sequence of up to `depth` turns and sums the score of every board that
//! ends a game (because it is full or because the last turn was reached),
//! weighted by the number of distinct move sequences that reach it. Boards
//! are merged per layer so each distinct position is expanded once.
//!
//! # Overview
//!
//! - [`moves`]: legal moves and successor boards
//! - [`aggregate`]: per-layer deduplication ([`HashAggregator`],
//!   [`SortMergeAggregator`])
//! - [`space`]: exact or symmetry-reduced state representation
//! - [`SearchEngine`]: the level-synchronous driver
//! - [`Puzzle`] and [`search`]: input parsing and the configured entry point
//!
//! # Examples
//!
//! ```
//! use cephalopods_core::Board;
//! use cephalopods_search::{AggregationStrategy, SearchConfig, search};
//!
//! let board: Board = "060 222 161".parse()?;
//! let config = SearchConfig::default()
//!     .with_strategy(AggregationStrategy::SortMerge)
//!     .with_symmetry(true);
//! let outcome = search(board, 20, &config)?;
//! assert_eq!(outcome.score.value(), 322_444_322);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
mod config;
mod engine;
mod error;
pub mod moves;
mod puzzle;
pub mod space;
mod stats;
#[cfg(test)]
mod testing;

pub use self::{
    aggregate::{Aggregator, Frontier, HashAggregator, SortMergeAggregator, Weight},
    config::{AggregationStrategy, SearchConfig},
    engine::{SearchEngine, SearchOutcome},
    error::{InputError, SearchError},
    moves::Move,
    puzzle::{Puzzle, search},
    space::{ExactSpace, StateSpace, SymmetricSpace},
    stats::{LayerStats, SearchStats},
};
