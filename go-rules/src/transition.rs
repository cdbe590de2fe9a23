//! Copy-on-write transitions between positions.
//!
//! Both operations build a fresh cell vector from the input board plus a
//! diff; the input board is never touched.

use crate::board::Board;
use crate::error::InvalidMove;
use crate::liberty::Group;
use crate::moves::Move;

/// Put every move's stone on the board and hand the turn to the opponent.
///
/// Each coordinate is bounds-checked before anything is built. Occupancy is
/// not checked; if two moves share a point the later one wins. The turn
/// flips once per call no matter how many stones are placed, and the new
/// board's `previous` is `board`.
pub fn place_stones(board: &Board, moves: &[Move]) -> Result<Board, InvalidMove> {
    if let Some(mv) = moves.iter().find(|mv| !board.in_bounds(mv.point)) {
        return Err(InvalidMove::OutOfBounds(mv.point));
    }

    let mut cells = board.cells().to_vec();
    for mv in moves {
        cells[board.index(mv.point)] = mv.stone.to_cell();
    }

    Ok(Board::from_parts(
        board.size(),
        board.turn().opponent(),
        cells,
        Some(board.clone()),
    ))
}

/// Take `victims` off the board.
///
/// Removal belongs to the move that caused it, so turn and `previous` are
/// carried over unchanged. With no victims the very same board handle is
/// returned (see [`Board::ptr_eq`]).
pub fn remove_stones(board: &Board, victims: &Group) -> Board {
    if victims.is_empty() {
        return board.clone();
    }

    let mut cells = board.cells().to_vec();
    for &point in victims.keys() {
        if board.in_bounds(point) {
            cells[board.index(point)] = 0;
        }
    }

    Board::from_parts(
        board.size(),
        board.turn(),
        cells,
        board.previous().cloned(),
    )
}
