use std::fmt;

use crate::Point;
use crate::stone::Stone;

/// Why a move was rejected. A rejected move never produces a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds(Point),
    OccupiedPoint(Point),
    OutOfTurn { expected: Stone },
    Suicide(Point),
    KoViolation(Point),
}

impl InvalidMove {
    /// Stable reason code, suitable for sending to a client.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidMove::OutOfBounds(_) => "out_of_bounds",
            InvalidMove::OccupiedPoint(_) => "occupied_point",
            InvalidMove::OutOfTurn { .. } => "out_of_turn",
            InvalidMove::Suicide(_) => "suicide",
            InvalidMove::KoViolation(_) => "ko_violation",
        }
    }
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfBounds((col, row)) => {
                write!(f, "move out of bounds: ({col}, {row})")
            }
            InvalidMove::OccupiedPoint((col, row)) => {
                write!(f, "stone already at ({col}, {row})")
            }
            InvalidMove::OutOfTurn { expected } => {
                write!(f, "out of turn: current turn is {}", expected.letter())
            }
            InvalidMove::Suicide(_) => write!(f, "stone placed in suicide"),
            InvalidMove::KoViolation(_) => write!(f, "move violates rule of ko"),
        }
    }
}

impl std::error::Error for InvalidMove {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBoardSize(u8),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardSize(size) => write!(f, "invalid board size: {size}"),
            ConfigError::Parse(reason) => write!(f, "invalid rules config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
