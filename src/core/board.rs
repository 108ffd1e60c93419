//! Board: the disc grid.
//!
//! A `rows x cols` grid stored as a flat row-major `Vec<Cell>`. Both sides
//! are even and between [`MIN_SIDE`] and [`MAX_SIDE`]; the size is fixed
//! once the board exists. Every accessor is bounds-checked and returns
//! [`BoardError::OutOfBounds`] instead of indexing past the grid.
//!
//! Coordinates are `(row, col)`, 0-indexed from the top-left corner.

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::player::Owner;

/// Smallest allowed side length.
pub const MIN_SIDE: usize = 4;

/// Largest allowed side length (one letter per index in move notation).
pub const MAX_SIDE: usize = 26;

/// Contents of one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Owner),
}

impl Cell {
    /// The disc owner, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Owner> {
        match self {
            Cell::Empty => None,
            Cell::Disc(owner) => Some(owner),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if this cell holds a disc of `owner`.
    #[must_use]
    pub fn is_owned_by(self, owner: Owner) -> bool {
        self == Cell::Disc(owner)
    }
}

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Check a side length against the board size rules.
#[must_use]
pub const fn is_valid_side(side: usize) -> bool {
    side >= MIN_SIDE && side <= MAX_SIDE && side % 2 == 0
}

/// The game board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let mut board = Board::new(repr.rows, repr.cols)?;
        if repr.cells.len() != board.cells.len() {
            return Err(BoardError::CellCount {
                rows: repr.rows,
                cols: repr.cols,
                expected: board.cells.len(),
                actual: repr.cells.len(),
            });
        }
        board.cells = repr.cells;
        Ok(board)
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// ```
    /// use rust_othello::core::{Board, Cell};
    ///
    /// let board = Board::new(6, 8).unwrap();
    /// assert_eq!(board.dimensions(), (6, 8));
    /// assert_eq!(board.get(5, 7).unwrap(), Cell::Empty);
    /// assert!(Board::new(5, 8).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if !is_valid_side(rows) || !is_valid_side(cols) {
            return Err(BoardError::InvalidDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Create a board seeded with the four centre discs of standard Othello.
    ///
    /// The top-left and bottom-right centre squares hold `PlayerB`, the
    /// other diagonal holds `PlayerA`.
    pub fn with_standard_opening(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let mut board = Self::new(rows, cols)?;
        let (r, c) = (rows / 2 - 1, cols / 2 - 1);

        board.set(r, c, Cell::Disc(Owner::PlayerB))?;
        board.set(r, c + 1, Cell::Disc(Owner::PlayerA))?;
        board.set(r + 1, c, Cell::Disc(Owner::PlayerA))?;
        board.set(r + 1, c + 1, Cell::Disc(Owner::PlayerB))?;

        Ok(board)
    }

    /// Calculate flat index from (row, col) coordinates.
    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if `(row, col)` lies on the board.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at `(row, col)`.
    ///
    /// No game rules are checked here; play goes through
    /// [`rules::apply_move`](crate::rules::apply_move).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Get the cell at a coordinate.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.get(coord.row, coord.col)
    }

    /// Number of discs belonging to `owner`.
    #[must_use]
    pub fn count_owner(&self, owner: Owner) -> usize {
        self.cells.iter().filter(|cell| cell.is_owned_by(owner)).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Check if every cell holds a disc.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over `(Coord, Cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Coord::new(idx / cols, idx % cols), cell))
    }
}
