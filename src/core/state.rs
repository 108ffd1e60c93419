//! Game state.
//!
//! ## GameState
//!
//! Everything that changes during play:
//! - The board
//! - Whose turn it is and the turn number
//! - Consecutive passes (two in a row ends the game)
//! - Move history
//!
//! History uses an `im` persistent vector so cloning a state is O(1),
//! which keeps "what if" probing of positions cheap.
//!
//! ## Score
//!
//! Disc counts per owner, read off the board.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::board::Board;
use super::player::{Owner, OwnerMap};

/// Disc totals for both owners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    discs: OwnerMap<usize>,
}

impl Score {
    /// Count the discs on a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self {
            discs: OwnerMap::new(|owner| board.count_owner(owner)),
        }
    }

    /// Discs held by `owner`.
    #[must_use]
    pub fn get(&self, owner: Owner) -> usize {
        self.discs[owner]
    }

    /// Discs on the board.
    #[must_use]
    pub fn total(&self) -> usize {
        self.discs.iter().map(|(_, &n)| n).sum()
    }

    /// The owner with strictly more discs, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Owner> {
        let a = self.get(Owner::PlayerA);
        let b = self.get(Owner::PlayerB);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Owner::PlayerA),
            std::cmp::Ordering::Less => Some(Owner::PlayerB),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The disc grid.
    pub board: Board,

    /// Owner whose turn it is.
    pub active: Owner,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Passes in a row, reset by any placement.
    pub consecutive_passes: u32,

    /// Applied moves, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a state at turn 1 with `first` to move.
    #[must_use]
    pub fn new(board: Board, first: Owner) -> Self {
        Self {
            board,
            active: first,
            turn_number: 1,
            consecutive_passes: 0,
            history: Vector::new(),
        }
    }

    /// Current disc totals.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Most recent applied move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }

    /// Record an applied move and hand the turn to the opponent.
    pub fn record(&mut self, mv: Move, flipped: usize) {
        let mover = self.active;
        self.history
            .push_back(MoveRecord::new(mover, mv, self.turn_number, flipped));

        if mv.is_skip() {
            self.consecutive_passes += 1;
        } else {
            self.consecutive_passes = 0;
        }

        self.turn_number += 1;
        self.active = mover.opponent();
    }
}
