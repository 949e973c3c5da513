//! Cell positions on the 3×3 board and their orthogonal adjacency.

use std::fmt::{self, Display};

/// A cell position in the range 0-8, in row-major order.
///
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
///
/// # Examples
///
/// ```
/// use cephalopods_core::Cell;
///
/// let cell = Cell::from_row_col(1, 2);
/// assert_eq!(cell.index(), 5);
/// assert_eq!(cell.neighbors().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// All nine cells in row-major order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// The center cell, the only cell with four neighbors.
    pub const CENTER: Self = Self::new(4);

    /// Creates a cell from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9, "cell index must be 0-8");
        Self { index }
    }

    /// Creates a cell from a row and a column, both in the range 0-2.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "row and column must be 0-2");
        Self::new(row * 3 + col)
    }

    /// Returns the row-major index (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 3
    }

    /// Returns the column (0-2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 3
    }

    /// Bit offset of this cell's 3-bit field in a packed board.
    pub(crate) const fn shift(self) -> u32 {
        self.index as u32 * 3
    }

    /// Returns the orthogonally adjacent cells, in ascending index order.
    ///
    /// Corners have two neighbors, edge centers three, and the center four.
    #[must_use]
    #[inline]
    pub fn neighbors(self) -> &'static [Cell] {
        let adjacency = &ADJACENCY[self.index as usize];
        &adjacency.cells[..adjacency.len]
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[derive(Debug, Clone, Copy)]
struct Adjacency {
    cells: [Cell; 4],
    len: usize,
}

impl Adjacency {
    const fn of(cell: Cell) -> Self {
        let mut adjacency = Self {
            cells: [cell; 4],
            len: 0,
        };
        let (row, col) = (cell.row(), cell.col());
        if row > 0 {
            adjacency = adjacency.with(Cell::from_row_col(row - 1, col));
        }
        if col > 0 {
            adjacency = adjacency.with(Cell::from_row_col(row, col - 1));
        }
        if col < 2 {
            adjacency = adjacency.with(Cell::from_row_col(row, col + 1));
        }
        if row < 2 {
            adjacency = adjacency.with(Cell::from_row_col(row + 1, col));
        }
        adjacency
    }

    const fn with(mut self, cell: Cell) -> Self {
        self.cells[self.len] = cell;
        self.len += 1;
        self
    }
}

const ADJACENCY: [Adjacency; 9] = {
    let mut table = [Adjacency::of(Cell::CENTER); 9];
    let mut i = 0;
    while i < 9 {
        table[i] = Adjacency::of(Cell::ALL[i]);
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_indices(index: u8) -> Vec<u8> {
        Cell::new(index)
            .neighbors()
            .iter()
            .map(|cell| cell.index())
            .collect()
    }

    #[test]
    fn test_adjacency_table() {
        assert_eq!(neighbor_indices(0), [1, 3]);
        assert_eq!(neighbor_indices(1), [0, 2, 4]);
        assert_eq!(neighbor_indices(2), [1, 5]);
        assert_eq!(neighbor_indices(3), [0, 4, 6]);
        assert_eq!(neighbor_indices(4), [1, 3, 5, 7]);
        assert_eq!(neighbor_indices(5), [2, 4, 8]);
        assert_eq!(neighbor_indices(6), [3, 7]);
        assert_eq!(neighbor_indices(7), [4, 6, 8]);
        assert_eq!(neighbor_indices(8), [5, 7]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for cell in Cell::ALL {
            for neighbor in cell.neighbors() {
                assert!(neighbor.neighbors().contains(&cell));
            }
        }
    }

    #[test]
    fn test_row_col() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_row_col(cell.row(), cell.col()), cell);
        }
        assert_eq!(Cell::CENTER.to_string(), "(1, 1)");
    }

    #[test]
    #[should_panic(expected = "cell index must be 0-8")]
    fn test_rejects_nine() {
        let _ = Cell::new(9);
    }
}
