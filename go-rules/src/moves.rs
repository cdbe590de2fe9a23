use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::stone::Stone;

/// A request to put one stone of `stone`'s color on `point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub stone: Stone,
    pub point: Point,
}

impl Move {
    pub fn new(stone: Stone, point: Point) -> Self {
        Move { stone, point }
    }

    pub fn black(col: u8, row: u8) -> Self {
        Move::new(Stone::Black, (col, row))
    }

    pub fn white(col: u8, row: u8) -> Self {
        Move::new(Stone::White, (col, row))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (col, row) = self.point;
        write!(f, "{}({col}, {row})", self.stone.letter())
    }
}
