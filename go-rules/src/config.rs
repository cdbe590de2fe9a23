use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ConfigError;

pub const DEFAULT_BOARD_SIZE: u8 = 19;

/// Largest board whose points can still be named with letter pairs
/// (`a`-`z`, then `A`-`Z`).
pub const MAX_BOARD_SIZE: u8 = 52;

/// Settings fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub board_size: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl RulesConfig {
    pub fn new(board_size: u8) -> Self {
        RulesConfig { board_size }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }

    /// The empty starting position for this config.
    pub fn initial_board(&self) -> Result<Board, ConfigError> {
        self.validate()?;
        tracing::debug!(board_size = self.board_size, "new board");
        Ok(Board::new(self.board_size))
    }
}
