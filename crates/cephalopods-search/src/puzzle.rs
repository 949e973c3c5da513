//! Puzzle input and the top-level search entry point.

use std::str::FromStr;

use cephalopods_core::{Board, Cell};

use crate::{
    AggregationStrategy, InputError, SearchConfig, SearchError,
    aggregate::{HashAggregator, SortMergeAggregator},
    engine::{SearchEngine, SearchOutcome},
    space::{ExactSpace, StateSpace, SymmetricSpace},
};

/// A puzzle instance: a search depth and an initial board.
///
/// The text form is ten whitespace-separated integers: the depth, then the
/// nine cell values in row-major order.
///
/// # Examples
///
/// ```
/// use cephalopods_search::{Puzzle, SearchConfig};
///
/// let puzzle: Puzzle = "20\n0 6 0\n2 2 2\n1 6 1\n".parse()?;
/// assert_eq!(puzzle.depth(), 20);
/// assert_eq!(puzzle.board().to_string(), "060 222 161");
///
/// let outcome = puzzle.solve(&SearchConfig::default())?;
/// assert_eq!(outcome.score.value(), 322_444_322);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Puzzle {
    depth: u32,
    board: Board,
}

impl Puzzle {
    /// Creates a puzzle.
    ///
    /// Any depth is accepted: the search stops early once every game has
    /// filled the board.
    #[must_use]
    pub const fn new(depth: u32, board: Board) -> Self {
        Self { depth, board }
    }

    /// Returns the number of turns to simulate.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the initial board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Runs the search with `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the search runs out of resources.
    pub fn solve(&self, config: &SearchConfig) -> Result<SearchOutcome, SearchError> {
        search(self.board, self.depth, config)
    }
}

impl FromStr for Puzzle {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut next_integer = || {
            tokens
                .next()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                        token: token.to_owned(),
                    })
                })
                .transpose()
        };

        let depth = next_integer()?.ok_or(InputError::MissingDepth)?;
        let depth =
            u32::try_from(depth).map_err(|_| InputError::DepthOutOfRange { depth })?;

        let mut board = Board::EMPTY;
        for cell in Cell::ALL {
            let index = usize::from(cell.index());
            let value = next_integer()?.ok_or(InputError::MissingCell { index })?;
            let value = u8::try_from(value)
                .ok()
                .filter(|&value| value <= 6)
                .ok_or(InputError::CellOutOfRange { index, value })?;
            board = board.set(cell, value);
        }

        if let Some(token) = tokens.next() {
            return Err(InputError::TrailingInput {
                token: token.to_owned(),
            });
        }
        Ok(Self { depth, board })
    }
}

/// Enumerates every game of up to `depth` turns from `board` with the
/// engine selected by `config`.
///
/// # Errors
///
/// Returns a [`SearchError`] if the search runs out of resources.
pub fn search(board: Board, depth: u32, config: &SearchConfig) -> Result<SearchOutcome, SearchError> {
    log::info!(
        "searching depth {depth} from {board} (strategy {}, symmetry {}, parallel {})",
        config.strategy(),
        config.symmetry(),
        config.parallel()
    );
    if config.symmetry() {
        run_in(SymmetricSpace, board, depth, config)
    } else {
        run_in(ExactSpace, board, depth, config)
    }
}

fn run_in<S: StateSpace>(
    space: S,
    board: Board,
    depth: u32,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    match config.strategy() {
        AggregationStrategy::HashTable => {
            SearchEngine::new(space, HashAggregator::<S::Weight>::new(), *config).run(board, depth)
        }
        AggregationStrategy::SortMerge => {
            SearchEngine::new(space, SortMergeAggregator::<S::Weight>::new(), *config).run(board, depth)
        }
    }
}
