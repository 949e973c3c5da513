use std::collections::TryReserveError;

/// Errors raised while parsing puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The input contained no tokens at all.
    #[display("missing search depth")]
    MissingDepth,
    /// Fewer than nine cell values followed the depth.
    #[display("missing value for cell {index}")]
    MissingCell {
        /// Row-major index of the first missing cell.
        index: usize,
    },
    /// A token was not an integer.
    #[display("expected an integer, found {token:?}")]
    InvalidInteger {
        /// The rejected token.
        token: String,
    },
    /// The depth is negative or does not fit in a `u32`.
    #[display("depth {depth} must be a non-negative 32-bit integer")]
    DepthOutOfRange {
        /// The rejected depth.
        depth: i64,
    },
    /// A cell value is outside 0-6.
    #[display("cell {index} has value {value}, expected 0-6")]
    CellOutOfRange {
        /// Row-major index of the cell.
        index: usize,
        /// The rejected value.
        value: i64,
    },
    /// Tokens remained after the depth and the nine cell values.
    #[display("unexpected trailing input {token:?}")]
    TrailingInput {
        /// The first unexpected token.
        token: String,
    },
}

/// Errors raised while running a search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// The deduplicated frontier grew beyond the configured limit.
    #[display("frontier at turn {turn} holds {len} boards, limit is {limit}")]
    FrontierLimit {
        /// Turn whose successors exceeded the limit.
        turn: u32,
        /// Number of distinct boards produced.
        len: usize,
        /// The configured limit.
        limit: usize,
    },
    /// Aggregation storage could not grow.
    #[display("failed to allocate aggregation storage: {_0}")]
    OutOfMemory(#[from] TryReserveError),
}
