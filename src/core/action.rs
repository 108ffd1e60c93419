//! Move representation.
//!
//! A move either places a disc on a coordinate or passes the turn:
//! - `Place(coord)`: put the mover's disc on an empty square
//! - `Skip`: pass, used when the mover has no legal placement
//!
//! Moves are transient input. Applied moves are kept in the game history
//! as [`MoveRecord`]s.

use serde::{Deserialize, Serialize};

use super::board::Coord;
use super::player::Owner;

/// A candidate move.
///
/// ## Example
///
/// ```
/// use rust_othello::core::{Coord, Move};
///
/// let place = Move::place(2, 3);
/// assert_eq!(place.coord(), Some(Coord::new(2, 3)));
///
/// assert!(Move::Skip.is_skip());
/// assert_eq!(Move::Skip.coord(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a disc.
    Place(Coord),
    /// Pass the turn.
    Skip,
}

impl Move {
    /// Create a placement at `(row, col)`.
    #[must_use]
    pub const fn place(row: usize, col: usize) -> Self {
        Move::Place(Coord::new(row, col))
    }

    /// The target coordinate, if this is a placement.
    #[must_use]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            Move::Place(coord) => Some(coord),
            Move::Skip => None,
        }
    }

    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, Move::Skip)
    }
}

impl From<Coord> for Move {
    fn from(coord: Coord) -> Self {
        Move::Place(coord)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(coord) => write!(f, "place {}", coord),
            Move::Skip => write!(f, "skip"),
        }
    }
}

/// An applied move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The owner who moved.
    pub mover: Owner,

    /// The move that was applied.
    pub mv: Move,

    /// Turn number when the move was applied.
    pub turn: u32,

    /// Number of opposing discs flipped by the move.
    pub flipped: usize,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mover: Owner, mv: Move, turn: u32, flipped: usize) -> Self {
        Self {
            mover,
            mv,
            turn,
            flipped,
        }
    }
}
