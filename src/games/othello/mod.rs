//! Othello on a configurable board.
//!
//! - Two players, `PlayerA` (dark) and `PlayerB` (light)
//! - Standard centre opening by default, or an empty board
//! - On your turn: place a disc that flanks at least one opposing run,
//!   or pass when you have no such placement
//! - The game ends when the board is full, both players pass in a row,
//!   or neither player can place; most discs wins, equal counts draw

mod game;

pub use game::{OthelloGame, OthelloGameBuilder};
