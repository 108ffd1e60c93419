//! # rust-othello
//!
//! Othello/Reversi rules engine for rectangular boards with even sides
//! between 4 and 26.
//!
//! ## Design Principles
//!
//! 1. **Bounds-Checked Board**: The grid is only reachable through
//!    accessors that return `BoardError` instead of indexing past the edge.
//!
//! 2. **Rejections Are Values**: An illegal move comes back as
//!    `MoveOutcome::Rejected`, never as an `Err`. Errors are reserved for
//!    broken caller contracts (bad dimensions, wrong turn).
//!
//! 3. **Atomic Moves**: All eight rays are scanned before anything is
//!    written, and every qualifying ray is flipped.
//!
//! ## Modules
//!
//! - `core`: Owners, board, moves, state, configuration, errors
//! - `rules`: Flanking capture and the `RulesEngine` trait
//! - `games`: The Othello game (turn order, passes, results)
//! - `notation`: Two-letter move text
//!
//! ## Example
//!
//! ```
//! use rust_othello::games::othello::OthelloGameBuilder;
//! use rust_othello::{Move, Owner, RulesEngine};
//!
//! let (mut game, mut state) = OthelloGameBuilder::new().build().unwrap();
//!
//! let outcome = game.apply_move(&mut state, Owner::PlayerA, Move::place(2, 3)).unwrap();
//! assert!(outcome.is_applied());
//! assert_eq!(state.score().get(Owner::PlayerA), 4);
//! assert_eq!(state.active, Owner::PlayerB);
//! ```

pub mod core;
pub mod games;
pub mod notation;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Cell, ConfigError, Coord, GameConfig, GameError, GameState, Move,
    MoveRecord, NotationError, Opening, Owner, OwnerMap, Player, Score,
};

pub use crate::rules::{apply_move, Applied, GameResult, MoveOutcome, Rejection, RulesEngine};

pub use crate::games::othello::{OthelloGame, OthelloGameBuilder};
