use std::collections::BTreeMap;

use crate::Point;
use crate::board::Board;
use crate::moves::Move;
use crate::stone::Stone;

/// Stones keyed by point. Used for groups, dead stones and captures.
pub type Group = BTreeMap<Point, Stone>;

/// Decide whether the group containing `group` is dead.
///
/// `group` is a connected set of same-colored stones, usually a single
/// seed. It is grown to the full chain one ring of friendly neighbors at a
/// time. As soon as any neighbor of the chain is empty the chain is alive
/// and an empty map is returned; if the chain closes without finding a
/// liberty, the whole chain is returned.
pub fn find_dead_stones(board: &Board, group: &Group) -> Group {
    let Some(&color) = group.values().next() else {
        return Group::new();
    };

    let mut group = group.clone();
    let mut frontier: Vec<Point> = group.keys().copied().collect();

    loop {
        let mut friendly = Group::new();

        for &point in &frontier {
            for n in board.neighbors(point) {
                if group.contains_key(&n) {
                    continue;
                }
                match board.stone_at(n) {
                    None => return Group::new(),
                    Some(stone) if stone == color => {
                        friendly.insert(n, stone);
                    }
                    Some(_) => {}
                }
            }
        }

        if friendly.is_empty() {
            return group;
        }

        frontier = friendly.keys().copied().collect();
        group.extend(friendly);
    }
}

/// Opponent stones killed by `placed`, which must already be on `board`.
///
/// Only opponent chains touching the placed stone are examined; no other
/// chain can have lost a liberty.
pub fn find_kills(board: &Board, placed: &Move) -> Group {
    let opponent = -placed.stone;
    let mut kills = Group::new();

    for n in board.neighbors(placed.point) {
        if board.stone_at(n) != Some(opponent) || kills.contains_key(&n) {
            continue;
        }
        kills.extend(find_dead_stones(board, &Group::from([(n, opponent)])));
    }

    kills
}
