use arrayvec::ArrayVec;

use crate::Point;

/// Whether `point` lies on a `size` x `size` board.
pub fn in_bounds(size: u8, (col, row): Point) -> bool {
    col < size && row < size
}

/// The orthogonal neighbors of `point` that are on the board.
///
/// Always in the order left, right, up, down (skipping off-board ones),
/// so a corner yields 2 points, an edge 3 and the interior 4. An
/// off-board point has no neighbors.
pub fn neighbors(size: u8, (col, row): Point) -> ArrayVec<Point, 4> {
    let mut result = ArrayVec::new();
    if !in_bounds(size, (col, row)) {
        return result;
    }
    if col > 0 {
        result.push((col - 1, row));
    }
    if col + 1 < size {
        result.push((col + 1, row));
    }
    if row > 0 {
        result.push((col, row - 1));
    }
    if row + 1 < size {
        result.push((col, row + 1));
    }
    result
}
