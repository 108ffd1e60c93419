//! Game configuration.
//!
//! `GameConfig` holds everything fixed at game start: board size, which
//! side moves first, the two player names and the opening layout. Defaults
//! match the classic console game (8x8, dark disc first, "Black" and
//! "White"). Configuration can be loaded from TOML:
//!
//! ```toml
//! rows = 8
//! cols = 10
//! first_player = "player_b"
//! opening = "empty"
//! player_a = "Ada"
//! player_b = "Grace"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::board::{is_valid_side, Board};
use super::error::{BoardError, ConfigError};
use super::player::{Owner, OwnerMap, Player};

/// Initial disc layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opening {
    /// Four discs on the centre 2x2, as in tournament Othello.
    #[default]
    Standard,
    /// No discs. Nothing can be captured from here, so play is limited
    /// to passing.
    Empty,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board rows (even, 4-26).
    pub rows: usize,

    /// Board columns (even, 4-26).
    pub cols: usize,

    /// Side that makes the first move.
    pub first_player: Owner,

    /// Initial disc layout.
    pub opening: Opening,

    /// Display name for `PlayerA`.
    pub player_a: String,

    /// Display name for `PlayerB`.
    pub player_b: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            first_player: Owner::PlayerA,
            opening: Opening::Standard,
            player_a: "Black".to_string(),
            player_b: "White".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_side(self.rows) || !is_valid_side(self.cols) {
            return Err(BoardError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            }
            .into());
        }
        if self.player_a.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player_a name must not be empty".into(),
            ));
        }
        if self.player_b.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player_b name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Display name for an owner.
    #[must_use]
    pub fn name(&self, owner: Owner) -> &str {
        match owner {
            Owner::PlayerA => &self.player_a,
            Owner::PlayerB => &self.player_b,
        }
    }

    /// Both player records.
    #[must_use]
    pub fn players(&self) -> OwnerMap<Player> {
        OwnerMap::new(|owner| Player::new(self.name(owner), owner))
    }

    /// Build the starting board for this configuration.
    pub fn new_board(&self) -> Result<Board, BoardError> {
        match self.opening {
            Opening::Standard => Board::with_standard_opening(self.rows, self.cols),
            Opening::Empty => Board::new(self.rows, self.cols),
        }
    }
}
