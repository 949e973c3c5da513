//! Per-layer statistics collected during a search.

use std::fmt::{self, Display};

use cephalopods_core::Count;

/// What happened at one search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerStats {
    /// Turn index of the layer (0 is the initial board).
    pub turn: u32,
    /// Distinct stored boards in the layer.
    pub frontier: usize,
    /// Stored boards that were expanded.
    pub expanded: usize,
    /// Stored boards that were scored as terminal.
    pub terminal: usize,
    /// Successor boards generated before merging.
    pub successors: usize,
    /// Paths reaching the layer, modulo 2³⁰.
    pub paths: Count,
}

impl Display for LayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turn {:>2}: {:>10} boards, {:>10} expanded, {:>10} terminal, {:>11} successors, paths {}",
            self.turn, self.frontier, self.expanded, self.terminal, self.successors, self.paths
        )
    }
}

/// Statistics for a whole search, one entry per processed layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    layers: Vec<LayerStats>,
}

impl SearchStats {
    pub(crate) fn push(&mut self, layer: LayerStats) {
        self.layers.push(layer);
    }

    /// Returns the per-layer statistics in turn order.
    #[must_use]
    pub fn layers(&self) -> &[LayerStats] {
        &self.layers
    }

    /// Returns the largest frontier seen.
    #[must_use]
    pub fn peak_frontier(&self) -> usize {
        self.layers.iter().map(|layer| layer.frontier).max().unwrap_or(0)
    }

    /// Returns the total number of stored boards expanded.
    #[must_use]
    pub fn total_expanded(&self) -> usize {
        self.layers.iter().map(|layer| layer.expanded).sum()
    }

    /// Returns the total number of stored boards scored as terminal.
    #[must_use]
    pub fn total_terminal(&self) -> usize {
        self.layers.iter().map(|layer| layer.terminal).sum()
    }

    /// Returns the total number of successors generated.
    #[must_use]
    pub fn total_successors(&self) -> usize {
        self.layers.iter().map(|layer| layer.successors).sum()
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in &self.layers {
            writeln!(f, "{layer}")?;
        }
        write!(
            f,
            "peak frontier {}, expanded {}, terminal {}, successors {}",
            self.peak_frontier(),
            self.total_expanded(),
            self.total_terminal(),
            self.total_successors()
        )
    }
}
