//! Othello rules.
//!
//! - `capture`: the flanking rule on a bare board (stateless)
//! - `engine`: the `RulesEngine` trait that adds turn order and results
//!
//! The direction vectors used by the ray scan stay private to this module.

pub mod capture;
mod direction;
pub mod engine;

pub use capture::{
    apply_move, captures, has_legal_placement, is_legal, legal_placements, Applied, Captures,
    MoveOutcome, Rejection,
};
pub use engine::{GameResult, RulesEngine};
