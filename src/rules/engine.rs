//! Rules engine trait for turn-based play.
//!
//! The capture functions in [`capture`](super::capture) work on a bare
//! board. A `RulesEngine` adds turn order on top:
//! - What moves the active owner may make
//! - How a move changes the game state
//! - When the game is over and who won

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError, GameState, Move, Owner, Score};

use super::capture::MoveOutcome;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Owner),
    /// Equal disc counts.
    Draw,
}

impl GameResult {
    /// Decide the result from final disc counts.
    #[must_use]
    pub fn from_score(score: &Score) -> Self {
        match score.leader() {
            Some(owner) => GameResult::Winner(owner),
            None => GameResult::Draw,
        }
    }

    /// Check if an owner won.
    #[must_use]
    pub fn is_winner(&self, owner: Owner) -> bool {
        match self {
            GameResult::Winner(o) => *o == owner,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if it is not `owner`'s turn or the game
///   is over; return `[Move::Skip]` if the owner must pass
/// - `apply_move`: Rejected moves must leave the state untouched
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get the legal moves for an owner.
    fn legal_moves(&self, state: &GameState, owner: Owner) -> Vec<Move>;

    /// Apply a move for `owner`.
    ///
    /// Must be deterministic: the same moves applied to equal states give
    /// equal states.
    fn apply_move(
        &mut self,
        state: &mut GameState,
        owner: Owner,
        mv: Move,
    ) -> Result<MoveOutcome, GameError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Legal moves for whoever is to move.
    fn active_legal_moves(&self, state: &GameState) -> Vec<Move> {
        self.legal_moves(state, state.active)
    }

    /// Check if `mv` is among the owner's legal moves.
    fn is_legal_move(&self, state: &GameState, owner: Owner, mv: Move) -> bool {
        self.legal_moves(state, owner).contains(&mv)
    }
}
