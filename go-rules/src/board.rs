use std::fmt;
use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::Point;
use crate::error::InvalidMove;
use crate::geometry;
use crate::moves::Move;
use crate::rules;
use crate::stone::Stone;

/// One immutable position: size, side to move, stones and the position it
/// was derived from.
///
/// `Board` is a handle over a shared node, so cloning it is cheap and never
/// copies stones. Nothing reachable from a `Board` is ever mutated once it
/// has been built, which makes it safe to share across threads.
#[derive(Clone)]
pub struct Board {
    node: Arc<Position>,
}

struct Position {
    size: u8,
    turn: Stone,
    /// Row-major cells, one per point, encoded with `Stone::to_cell` (0 = empty).
    cells: Vec<i8>,
    previous: Option<Board>,
}

impl Board {
    /// The empty starting position with Black to move.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "board size must be positive");

        Board::from_parts(size, Stone::Black, vec![0; cell_count(size)], None)
    }

    /// A root position holding an arbitrary setup. Later stones on the same
    /// point replace earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Off-board stones are an error, not a panic.
    pub fn with_stones<I>(size: u8, turn: Stone, stones: I) -> Result<Self, InvalidMove>
    where
        I: IntoIterator<Item = (Point, Stone)>,
    {
        assert!(size > 0, "board size must be positive");

        let mut cells = vec![0; cell_count(size)];
        for (point, stone) in stones {
            if !geometry::in_bounds(size, point) {
                return Err(InvalidMove::OutOfBounds(point));
            }
            cells[index(size, point)] = stone.to_cell();
        }

        Ok(Board::from_parts(size, turn, cells, None))
    }

    pub(crate) fn from_parts(
        size: u8,
        turn: Stone,
        cells: Vec<i8>,
        previous: Option<Board>,
    ) -> Self {
        debug_assert_eq!(cells.len(), cell_count(size));

        Board {
            node: Arc::new(Position {
                size,
                turn,
                cells,
                previous,
            }),
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.node.size
    }

    /// The color whose move is next.
    pub fn turn(&self) -> Stone {
        self.node.turn
    }

    pub fn previous(&self) -> Option<&Board> {
        self.node.previous.as_ref()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.in_bounds(point) {
            Stone::from_cell(self.node.cells[index(self.size(), point)])
        } else {
            None
        }
    }

    pub fn is_occupied(&self, point: Point) -> bool {
        self.stone_at(point).is_some()
    }

    /// Occupied points with their colors, in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Stone)> + '_ {
        let size = self.size() as usize;
        self.node.cells.iter().enumerate().filter_map(move |(i, &cell)| {
            Stone::from_cell(cell).map(|stone| (((i % size) as u8, (i / size) as u8), stone))
        })
    }

    pub fn stone_count(&self) -> usize {
        self.node.cells.iter().filter(|&&c| c != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.node.cells.iter().all(|&c| c == 0)
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        geometry::in_bounds(self.size(), point)
    }

    pub fn neighbors(&self, point: Point) -> ArrayVec<Point, 4> {
        geometry::neighbors(self.size(), point)
    }

    // -- History --

    /// Ancestors of this position, nearest first, ending at the root.
    pub fn history(&self) -> History<'_> {
        History {
            next: self.previous(),
        }
    }

    /// Number of positions this one descends from.
    pub fn move_number(&self) -> usize {
        self.history().count()
    }

    /// Whether both boards hold exactly the same stones, ignoring turn and
    /// history.
    pub fn same_position(&self, other: &Board) -> bool {
        self.size() == other.size() && self.node.cells == other.node.cells
    }

    /// Whether both handles refer to the very same position node.
    pub fn ptr_eq(a: &Board, b: &Board) -> bool {
        Arc::ptr_eq(&a.node, &b.node)
    }

    // -- Game actions --

    /// Play `mv`, returning the resulting position. See [`rules::play_move`].
    pub fn play(&self, mv: &Move) -> Result<Board, InvalidMove> {
        rules::play_move(self, mv)
    }

    // -- Internal helpers --

    pub(crate) fn cells(&self) -> &[i8] {
        &self.node.cells
    }

    pub(crate) fn index(&self, point: Point) -> usize {
        index(self.size(), point)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        if Board::ptr_eq(self, other) {
            return true;
        }

        let same_previous = match (self.previous(), other.previous()) {
            (None, None) => true,
            (Some(a), Some(b)) => Board::ptr_eq(a, b),
            _ => false,
        };

        same_previous && self.turn() == other.turn() && self.same_position(other)
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size())
            .field("turn", &self.turn())
            .field("stones", &self.stones().collect::<Vec<_>>())
            .field("move_number", &self.move_number())
            .finish()
    }
}

// Long games build long chains; unlink ancestors one at a time so dropping
// the last handle does not recurse once per move.
impl Drop for Position {
    fn drop(&mut self) {
        let mut next = self.previous.take();
        while let Some(board) = next {
            match Arc::try_unwrap(board.node) {
                Ok(mut position) => next = position.previous.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a board's ancestors. See [`Board::history`].
pub struct History<'a> {
    next: Option<&'a Board>,
}

impl<'a> Iterator for History<'a> {
    type Item = &'a Board;

    fn next(&mut self) -> Option<Self::Item> {
        let board = self.next?;
        self.next = board.previous();
        Some(board)
    }
}

fn cell_count(size: u8) -> usize {
    size as usize * size as usize
}

#[inline]
fn index(size: u8, (col, row): Point) -> usize {
    row as usize * size as usize + col as usize
}

/// Test helper: build a square board from an ASCII layout.
/// 'B' = Black, 'W' = White, anything else = empty.
#[cfg(test)]
pub(crate) fn board_from_layout(layout: &[&str], turn: Stone) -> Board {
    let size = layout.len() as u8;
    assert!(
        layout.iter().all(|row| row.len() == size as usize),
        "layout must be square"
    );

    let stones = layout.iter().enumerate().flat_map(|(row, line)| {
        line.chars().enumerate().filter_map(move |(col, c)| {
            let stone = match c {
                'B' => Stone::Black,
                'W' => Stone::White,
                _ => return None,
            };
            Some(((col as u8, row as u8), stone))
        })
    });

    Board::with_stones(size, turn, stones).unwrap()
}
