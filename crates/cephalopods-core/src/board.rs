//! Packed 3×3 board of die values.

use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use crate::{BoardError, Cell, Die};

/// A 3×3 board of cells, each empty (`0`) or holding a die (`1`-`6`).
///
/// The board is packed into a `u32`: cell `i` occupies bits `3i..3i + 3`,
/// so the whole board fits in the low 27 bits. Every field is in the range
/// 0-6; constructors that take untrusted data validate this, while the
/// in-place setters treat it as a caller precondition.
///
/// Ordering and equality follow the packed integer, which is also the
/// order used to pick canonical boards under symmetry.
///
/// # Examples
///
/// ```
/// use cephalopods_core::{Board, Cell, Die};
///
/// let board: Board = "060 222 161".parse()?;
/// assert_eq!(board.get(Cell::new(1)), 6);
/// assert!(board.is_empty_at(Cell::new(0)));
/// assert!(!board.is_full());
///
/// let board = board.place(Cell::new(0), Die::D1).place(Cell::new(2), Die::D2);
/// assert!(board.is_full());
/// assert_eq!(board.score(), 162_222_161);
/// # Ok::<(), cephalopods_core::BoardError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Board {
    raw: u32,
}

const FIELD_MASK: u32 = 0b111;
const USED_MASK: u32 = (1 << 27) - 1;
/// Lowest bit of every field.
const LOW_BITS: u32 = 0o111_111_111;

impl Board {
    /// The board with every cell empty.
    pub const EMPTY: Self = Self { raw: 0 };

    /// Creates a board from its packed representation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidRaw`] if bits above the 27 field bits
    /// are set or any field holds `7`.
    pub const fn try_from_raw(raw: u32) -> Result<Self, BoardError> {
        // A field equals 7 exactly when all three of its bits are set.
        let all_set = raw & (raw >> 1) & (raw >> 2) & LOW_BITS;
        if raw & !USED_MASK != 0 || all_set != 0 {
            return Err(BoardError::InvalidRaw { raw });
        }
        Ok(Self { raw })
    }

    /// Returns the packed representation.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.raw
    }

    /// Creates a board from nine cell values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ValueOutOfRange`] if any value exceeds 6.
    pub fn from_values(values: [u8; 9]) -> Result<Self, BoardError> {
        Cell::ALL
            .into_iter()
            .zip(values)
            .try_fold(Self::EMPTY, |board, (cell, value)| {
                if value > Die::MAX.value() {
                    return Err(BoardError::ValueOutOfRange { cell, value });
                }
                Ok(board.set(cell, value))
            })
    }

    /// Returns the nine cell values in row-major order.
    #[must_use]
    pub fn values(self) -> [u8; 9] {
        Cell::ALL.map(|cell| self.get(cell))
    }

    /// Returns the value of `cell` (`0` when empty).
    #[must_use]
    #[inline]
    pub const fn get(self, cell: Cell) -> u8 {
        #[expect(clippy::cast_possible_truncation)]
        let value = ((self.raw >> cell.shift()) & FIELD_MASK) as u8;
        value
    }

    /// Returns the die on `cell`, or `None` when the cell is empty.
    #[must_use]
    pub const fn die(self, cell: Cell) -> Option<Die> {
        Die::try_from_value(self.get(cell))
    }

    /// Returns a board with `cell` overwritten by `value`.
    ///
    /// `value` must be in the range 0-6; this is checked in debug builds only.
    #[must_use]
    #[inline]
    pub const fn set(self, cell: Cell, value: u8) -> Self {
        debug_assert!(value <= Die::MAX.value(), "cell value must be 0-6");
        let cleared = self.clear(cell);
        Self {
            raw: cleared.raw | ((value as u32) << cell.shift()),
        }
    }

    /// Returns a board with `die` placed on `cell`.
    #[must_use]
    #[inline]
    pub const fn place(self, cell: Cell, die: Die) -> Self {
        self.set(cell, die.value())
    }

    /// Returns a board with `cell` emptied.
    #[must_use]
    #[inline]
    pub const fn clear(self, cell: Cell) -> Self {
        Self {
            raw: self.raw & !(FIELD_MASK << cell.shift()),
        }
    }

    /// Returns `true` if `cell` holds no die.
    #[must_use]
    #[inline]
    pub const fn is_empty_at(self, cell: Cell) -> bool {
        self.raw & (FIELD_MASK << cell.shift()) == 0
    }

    /// Returns `true` if every cell holds a die.
    ///
    /// A full board is terminal: no further placement happens on it.
    #[must_use]
    #[inline]
    pub const fn is_full(self) -> bool {
        let occupied = (self.raw | (self.raw >> 1) | (self.raw >> 2)) & LOW_BITS;
        occupied == LOW_BITS
    }

    /// Returns an iterator over the empty cells in ascending order.
    pub fn empty_cells(self) -> impl Iterator<Item = Cell> {
        Cell::ALL
            .into_iter()
            .filter(move |&cell| self.is_empty_at(cell))
    }

    /// Returns the number of cells holding a die.
    #[must_use]
    pub const fn occupied_count(self) -> u32 {
        ((self.raw | (self.raw >> 1) | (self.raw >> 2)) & LOW_BITS).count_ones()
    }

    /// Returns the board read as a nine-digit decimal number.
    ///
    /// Cell 0 is the most significant digit, so the result is below 10⁹
    /// (and therefore below the 2³⁰ scoring modulus).
    #[must_use]
    pub const fn score(self) -> u32 {
        let mut score = 0;
        let mut i = 0;
        while i < 9 {
            score = score * 10 + self.get(Cell::ALL[i]) as u32;
            i += 1;
        }
        score
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().into_iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({self})")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells in row-major order.
    ///
    /// Digits `0`-`6` are cell values; `.` and `_` are also accepted as
    /// empty cells. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0; 9];
        let mut len = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let value = match ch {
                '.' | '_' => 0,
                '0'..='6' => ch as u8 - b'0',
                _ => return Err(BoardError::InvalidCharacter { ch }),
            };
            if len < values.len() {
                values[len] = value;
            }
            len += 1;
        }
        if len != values.len() {
            return Err(BoardError::CellCount { len });
        }
        Self::from_values(values)
    }
}

impl TryFrom<u32> for Board {
    type Error = BoardError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::try_from_raw(raw)
    }
}

impl From<Board> for u32 {
    fn from(board: Board) -> u32 {
        board.raw()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board_strategy() -> impl Strategy<Value = Board> {
        prop::array::uniform9(0..=6u8).prop_map(|values| Board::from_values(values).unwrap())
    }

    #[test]
    fn test_empty_and_full() {
        assert!(!Board::EMPTY.is_full());
        assert_eq!(Board::EMPTY.occupied_count(), 0);
        assert_eq!(Board::EMPTY.empty_cells().count(), 9);

        let full = Board::from_values([1, 2, 3, 4, 5, 6, 1, 2, 3]).unwrap();
        assert!(full.is_full());
        assert_eq!(full.occupied_count(), 9);
        assert_eq!(full.empty_cells().count(), 0);
        assert!(!full.clear(Cell::CENTER).is_full());
    }

    #[test]
    fn test_score_is_decimal_reading() {
        let board = Board::from_values([1, 2, 3, 4, 5, 6, 1, 2, 3]).unwrap();
        assert_eq!(board.score(), 123_456_123);
        assert_eq!(Board::EMPTY.score(), 0);
        let board = Board::from_values([0, 0, 0, 0, 0, 0, 0, 0, 6]).unwrap();
        assert_eq!(board.score(), 6);
        let board = Board::from_values([6; 9]).unwrap();
        assert_eq!(board.score(), 666_666_666);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "060 222 161".parse().unwrap();
        assert_eq!(board.values(), [0, 6, 0, 2, 2, 2, 1, 6, 1]);
        assert_eq!(board.to_string(), "060 222 161");
        assert_eq!(format!("{board:?}"), "Board(060 222 161)");

        let board: Board = "\n  ._.\n 5_5\n ... ".parse().unwrap();
        assert_eq!(board.values(), [0, 0, 0, 5, 0, 5, 0, 0, 0]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "06022216".parse::<Board>(),
            Err(BoardError::CellCount { len: 8 })
        );
        assert_eq!(
            "0602221610".parse::<Board>(),
            Err(BoardError::CellCount { len: 10 })
        );
        assert_eq!(
            "060 222 167".parse::<Board>(),
            Err(BoardError::InvalidCharacter { ch: '7' })
        );
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        assert_eq!(
            Board::from_values([0, 0, 0, 0, 7, 0, 0, 0, 0]),
            Err(BoardError::ValueOutOfRange {
                cell: Cell::CENTER,
                value: 7
            })
        );
    }

    #[test]
    fn test_try_from_raw() {
        assert_eq!(Board::try_from_raw(0), Ok(Board::EMPTY));
        assert!(Board::try_from_raw(0b111 << 12).is_err());
        assert!(Board::try_from_raw(1 << 27).is_err());
        let board = Board::from_values([6, 5, 4, 3, 2, 1, 0, 6, 6]).unwrap();
        assert_eq!(Board::try_from(board.raw()), Ok(board));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cell value must be 0-6")]
    fn test_set_rejects_out_of_range_value() {
        let _ = Board::EMPTY.set(Cell::CENTER, 7);
    }

    proptest! {
        #[test]
        fn prop_set_get_round_trip(board in board_strategy(), index in 0..9u8, value in 0..=6u8) {
            let cell = Cell::new(index);
            let updated = board.set(cell, value);
            prop_assert_eq!(updated.get(cell), value);
            for other in Cell::ALL.into_iter().filter(|&other| other != cell) {
                prop_assert_eq!(updated.get(other), board.get(other));
            }
            prop_assert_eq!(updated.clear(cell).get(cell), 0);
        }

        #[test]
        fn prop_full_iff_no_empty_cell(board in board_strategy()) {
            let any_empty = Cell::ALL.into_iter().any(|cell| board.get(cell) == 0);
            prop_assert_eq!(board.is_full(), !any_empty);
            prop_assert_eq!(board.occupied_count() as usize, 9 - board.empty_cells().count());
        }

        #[test]
        fn prop_raw_round_trip(board in board_strategy()) {
            prop_assert_eq!(Board::try_from_raw(board.raw()), Ok(board));
            prop_assert_eq!(board.to_string().parse::<Board>(), Ok(board));
        }
    }
}
