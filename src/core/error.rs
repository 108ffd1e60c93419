//! Error types.
//!
//! Rejected moves are not errors: they come back as
//! [`MoveOutcome::Rejected`](crate::rules::MoveOutcome). The enums here
//! cover faults (broken caller contracts) and configuration problems.

use std::path::PathBuf;

use super::player::Owner;

/// Faults raised by [`Board`](super::Board) accessors and construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols}: each side must be even and between 4 and 26")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("a {rows}x{cols} board needs {expected} cells, got {actual}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised by the game layer for calls that break turn order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Owner, got: Owner },

    #[error("the game is already over")]
    GameOver,

    #[error("board fault: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("board fault: {0}")]
    Board(#[from] BoardError),
}

/// Errors from parsing move text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("no move entered")]
    Empty,

    #[error("expected two letters (row then column), got {0} characters")]
    BadLength(usize),

    #[error("'{0}' is not a letter from a to z")]
    BadLetter(char),
}
