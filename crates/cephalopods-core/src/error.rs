use crate::Cell;

/// Errors returned when constructing a [`Board`](crate::Board) from untrusted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A cell value is outside the range 0-6.
    #[display("cell {cell} has value {value}, expected 0-6")]
    ValueOutOfRange {
        /// The offending cell.
        cell: Cell,
        /// The rejected value.
        value: u8,
    },
    /// A packed board has bits set outside its nine 3-bit fields, or a field equal to 7.
    #[display("invalid packed board {raw:#010x}")]
    InvalidRaw {
        /// The rejected packed value.
        raw: u32,
    },
    /// Board text did not contain exactly nine cells.
    #[display("expected 9 cells, found {len}")]
    CellCount {
        /// Number of cells found.
        len: usize,
    },
    /// Board text contained a character that is not a cell value.
    #[display("invalid cell character {ch:?}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
    },
}
