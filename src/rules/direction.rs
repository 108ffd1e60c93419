//! The eight compass directions used by the ray scan.

use crate::core::{Board, Coord};

/// A unit step `(d_row, d_col)`, never `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    /// Clockwise from north-west.
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, 1),
        Direction::new(1, 1),
        Direction::new(1, 0),
        Direction::new(1, -1),
        Direction::new(0, -1),
    ];

    /// The neighbour of `from` in this direction, or `None` off the board.
    #[inline]
    pub fn step(self, from: Coord, board: &Board) -> Option<Coord> {
        let row = from.row.checked_add_signed(self.d_row)?;
        let col = from.col.checked_add_signed(self.d_col)?;
        board.contains(row, col).then_some(Coord::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions_distinct_and_nonzero() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert!(a.d_row != 0 || a.d_col != 0);
            assert!(a.d_row.abs() <= 1 && a.d_col.abs() <= 1);
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_step_inside() {
        let board = Board::new(8, 8).unwrap();
        let from = Coord::new(3, 3);

        assert_eq!(Direction::new(-1, -1).step(from, &board), Some(Coord::new(2, 2)));
        assert_eq!(Direction::new(0, 1).step(from, &board), Some(Coord::new(3, 4)));
        assert_eq!(Direction::new(1, -1).step(from, &board), Some(Coord::new(4, 2)));
    }

    #[test]
    fn test_step_off_board() {
        let board = Board::new(4, 6).unwrap();

        assert_eq!(Direction::new(-1, 0).step(Coord::new(0, 2), &board), None);
        assert_eq!(Direction::new(0, -1).step(Coord::new(2, 0), &board), None);
        assert_eq!(Direction::new(1, 0).step(Coord::new(3, 2), &board), None);
        assert_eq!(Direction::new(0, 1).step(Coord::new(2, 5), &board), None);
        assert_eq!(Direction::new(1, 1).step(Coord::new(3, 5), &board), None);
    }
}
