//! Search configuration.

use derive_more::Display;

/// How successor boards are merged within a layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum AggregationStrategy {
    /// Open-addressed hash table that merges on insert.
    #[default]
    #[display("hash-table")]
    HashTable,
    /// Buffer, radix-sort by packed board, then merge runs.
    #[display("sort-merge")]
    SortMerge,
}

/// Options controlling a search run.
///
/// Every option affects only speed and memory use; the final score is the
/// same for every configuration.
///
/// # Examples
///
/// ```
/// use cephalopods_search::{AggregationStrategy, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_strategy(AggregationStrategy::SortMerge)
///     .with_symmetry(true)
///     .with_max_frontier(Some(1_000_000));
/// assert!(config.symmetry());
/// assert!(!config.parallel());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    strategy: AggregationStrategy,
    symmetry: bool,
    parallel: bool,
    max_frontier: Option<usize>,
}

impl SearchConfig {
    /// Sets the aggregation strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: AggregationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables symmetry reduction.
    #[must_use]
    pub const fn with_symmetry(mut self, symmetry: bool) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Enables or disables parallel expansion of each layer.
    ///
    /// Parallel expansion always merges through hash tables, one per worker
    /// chunk; the configured strategy is used for the sequential path.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Limits the number of distinct stored boards in any layer.
    ///
    /// `None` means unlimited.
    #[must_use]
    pub const fn with_max_frontier(mut self, max_frontier: Option<usize>) -> Self {
        self.max_frontier = max_frontier;
        self
    }

    /// Returns the aggregation strategy.
    #[must_use]
    pub const fn strategy(&self) -> AggregationStrategy {
        self.strategy
    }

    /// Returns `true` if symmetry reduction is enabled.
    #[must_use]
    pub const fn symmetry(&self) -> bool {
        self.symmetry
    }

    /// Returns `true` if layers are expanded in parallel.
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the frontier limit, if any.
    #[must_use]
    pub const fn max_frontier(&self) -> Option<usize> {
        self.max_frontier
    }

    /// Returns every combination of strategy, symmetry and parallelism,
    /// without a frontier limit.
    #[must_use]
    pub fn all_combinations() -> Vec<Self> {
        let mut configs = Vec::with_capacity(8);
        for strategy in [AggregationStrategy::HashTable, AggregationStrategy::SortMerge] {
            for symmetry in [false, true] {
                for parallel in [false, true] {
                    configs.push(
                        Self::default()
                            .with_strategy(strategy)
                            .with_symmetry(symmetry)
                            .with_parallel(parallel),
                    );
                }
            }
        }
        configs
    }
}
