//! Move legality and capture rules for the game of Go.
//!
//! Every position is an immutable [`Board`]. Playing a move never touches
//! the input board; it returns a new one that links back to its
//! predecessor, and that chain is what the ko check walks.

pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod liberty;
pub mod moves;
pub mod rules;
pub mod stone;
pub mod transition;

/// A `(col, row)` coordinate on the board.
pub type Point = (u8, u8);

pub use board::{Board, History};
pub use config::RulesConfig;
pub use error::{ConfigError, InvalidMove};
pub use liberty::{Group, find_dead_stones, find_kills};
pub use moves::Move;
pub use rules::play_move;
pub use stone::Stone;
pub use transition::{place_stones, remove_stones};
