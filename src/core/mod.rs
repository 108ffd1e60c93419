//! Core types: owners, board, moves, state, configuration, errors.
//!
//! Nothing in here knows the capture rule; that lives in `rules`.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use action::{Move, MoveRecord};
pub use board::{Board, Cell, Coord, MAX_SIDE, MIN_SIDE};
pub use config::{GameConfig, Opening};
pub use error::{BoardError, ConfigError, GameError, NotationError};
pub use player::{Owner, OwnerMap, Player};
pub use state::{GameState, Score};
