use crate::board::Board;
use crate::error::InvalidMove;
use crate::liberty::{Group, find_dead_stones, find_kills};
use crate::moves::Move;
use crate::transition::{place_stones, remove_stones};

/// Play `mv` on `board` and return the resulting position.
///
/// Checks run in order: bounds, occupancy, turn, then placement and
/// capture, then suicide, then ko. Suicide is judged after captures are
/// removed, since capturing can give the played stone its liberties. Ko is
/// only checked when the move captured something and compares the new
/// stones against every earlier position in the chain (positional
/// superko). On any error `board` is all the caller has; nothing is built.
pub fn play_move(board: &Board, mv: &Move) -> Result<Board, InvalidMove> {
    let result = try_play(board, mv);
    if let Err(e) = &result {
        tracing::debug!(
            reason = e.code(),
            stone = %mv.stone,
            col = mv.point.0,
            row = mv.point.1,
            "rejected move"
        );
    }
    result
}

fn try_play(board: &Board, mv: &Move) -> Result<Board, InvalidMove> {
    if !board.in_bounds(mv.point) {
        return Err(InvalidMove::OutOfBounds(mv.point));
    }

    if board.is_occupied(mv.point) {
        return Err(InvalidMove::OccupiedPoint(mv.point));
    }

    if mv.stone != board.turn() {
        return Err(InvalidMove::OutOfTurn {
            expected: board.turn(),
        });
    }

    let placed = place_stones(board, std::slice::from_ref(mv))?;

    let kills = find_kills(&placed, mv);
    let resolved = remove_stones(&placed, &kills);

    if is_suicide(&resolved, mv) {
        return Err(InvalidMove::Suicide(mv.point));
    }

    if !kills.is_empty() {
        tracing::debug!(count = kills.len(), "{mv} captures");
        if repeats_earlier_position(&resolved) {
            return Err(InvalidMove::KoViolation(mv.point));
        }
    }

    tracing::trace!(move_number = resolved.move_number(), "played {mv}");
    Ok(resolved)
}

fn is_suicide(board: &Board, mv: &Move) -> bool {
    !find_dead_stones(board, &Group::from([(mv.point, mv.stone)])).is_empty()
}

fn repeats_earlier_position(board: &Board) -> bool {
    board.history().enumerate().any(|(depth, ancestor)| {
        tracing::trace!(depth, "ko check against ancestor");
        ancestor.same_position(board)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_from_layout;
    use crate::stone::Stone;

    #[test]
    fn places_a_stone_on_an_empty_board() {
        let board = Board::new(19);
        let next = play_move(&board, &Move::black(2, 3)).unwrap();

        assert_eq!(next.stones().collect::<Vec<_>>(), vec![((2, 3), Stone::Black)]);
        assert_eq!(next.turn(), Stone::White);
        assert!(Board::ptr_eq(next.previous().unwrap(), &board));
    }

    #[test]
    fn rejects_occupied_point_for_either_color() {
        let board = board_from_layout(&["+++", "+B+", "+++"], Stone::White);
        assert_eq!(
            play_move(&board, &Move::white(1, 1)),
            Err(InvalidMove::OccupiedPoint((1, 1)))
        );
        assert_eq!(
            play_move(&board, &Move::black(1, 1)),
            Err(InvalidMove::OccupiedPoint((1, 1)))
        );
    }

    #[test]
    fn rejects_out_of_turn() {
        let board = Board::new(9);
        assert_eq!(
            play_move(&board, &Move::white(4, 4)),
            Err(InvalidMove::OutOfTurn {
                expected: Stone::Black
            })
        );
    }

    #[test]
    fn out_of_bounds_is_reported_before_turn() {
        let board = Board::new(9);
        assert_eq!(
            play_move(&board, &Move::white(9, 0)),
            Err(InvalidMove::OutOfBounds((9, 0)))
        );
        assert_eq!(
            play_move(&board, &Move::black(0, 42)),
            Err(InvalidMove::OutOfBounds((0, 42)))
        );
    }

    #[test]
    fn captures_surrounded_stone() {
        let board = board_from_layout(&["+B++", "BWB+", "++++", "++++"], Stone::Black);
        let next = play_move(&board, &Move::black(1, 2)).unwrap();

        assert_eq!(next.stone_at((1, 1)), None);
        assert_eq!(next.stone_count(), 4);
        for p in [(1, 0), (0, 1), (2, 1), (1, 2)] {
            assert_eq!(next.stone_at(p), Some(Stone::Black));
        }
        // Capturing does not cost an extra turn flip.
        assert_eq!(next.turn(), Stone::White);
    }

    #[test]
    fn captures_stone_chain() {
        let board = board_from_layout(&["+BB+", "BWWB", "W+WB", "WWB+"], Stone::Black);
        let next = play_move(&board, &Move::black(1, 2)).unwrap();

        for p in [(1, 1), (2, 1), (2, 2), (0, 2), (0, 3), (1, 3)] {
            assert_eq!(next.stone_at(p), None, "{p:?} should be captured");
        }
        assert_eq!(next.stone_at((1, 2)), Some(Stone::Black));
    }

    #[test]
    fn rejects_suicide() {
        let board = board_from_layout(&["+B++", "B+++", "++++", "++++"], Stone::White);
        assert_eq!(
            play_move(&board, &Move::white(0, 0)),
            Err(InvalidMove::Suicide((0, 0)))
        );
    }

    #[test]
    fn rejects_group_suicide() {
        let board = board_from_layout(&["W+B+", "WB++", "B+++", "++++"], Stone::White);
        assert_eq!(
            play_move(&board, &Move::white(1, 0)),
            Err(InvalidMove::Suicide((1, 0)))
        );
    }

    #[test]
    fn capture_rescues_otherwise_suicidal_move() {
        // White at (0,0) would have no liberties, but it takes both
        // neighboring Black stones.
        let board = board_from_layout(&["+BW+", "BW++", "W+++", "++++"], Stone::White);
        let next = play_move(&board, &Move::white(0, 0)).unwrap();

        assert_eq!(next.stone_at((0, 0)), Some(Stone::White));
        assert_eq!(next.stone_at((1, 0)), None);
        assert_eq!(next.stone_at((0, 1)), None);
    }

    #[test]
    fn rejects_immediate_ko_recapture() {
        let board = board_from_layout(&["+BW+", "BW+W", "+BW+", "++++"], Stone::Black);
        let board = play_move(&board, &Move::black(2, 1)).unwrap();
        assert_eq!(board.stone_at((1, 1)), None);

        assert_eq!(
            play_move(&board, &Move::white(1, 1)),
            Err(InvalidMove::KoViolation((1, 1)))
        );
    }

    #[test]
    fn ko_check_sees_the_whole_history() {
        let root = Board::new(5);
        let a = place_stones(&root, &[Move::black(0, 0)]).unwrap();
        let b = place_stones(&a, &[Move::white(4, 4)]).unwrap();
        let c = place_stones(&b, &[Move::black(2, 2)]).unwrap();
        let d = place_stones(&c, &[Move::white(1, 1)]).unwrap();
        let d = remove_stones(
            &d,
            &Group::from([((1, 1), Stone::White), ((2, 2), Stone::Black)]),
        );

        // `d` matches `b`, two positions back.
        assert!(repeats_earlier_position(&d));
        assert!(!repeats_earlier_position(&c));
    }

    #[test]
    fn repeating_a_position_without_capture_is_allowed() {
        let root = Board::new(5);
        let a = place_stones(&root, &[Move::black(2, 2)]).unwrap();
        let b = place_stones(&a, &[Move::white(1, 1)]).unwrap();
        let c = place_stones(&b, &[Move::black(0, 0)]).unwrap();
        let d = remove_stones(
            &c,
            &Group::from([((1, 1), Stone::White), ((0, 0), Stone::Black)]),
        );
        assert_eq!(d.turn(), Stone::White);
        assert!(d.same_position(&a));

        // White at (1,1) captures nothing, so the repeat of `b` goes unchecked.
        let next = play_move(&d, &Move::white(1, 1)).unwrap();
        assert!(next.same_position(&b));
        assert!(repeats_earlier_position(&next));
    }

    #[test]
    fn rejected_move_leaves_board_untouched() {
        let board = board_from_layout(&["+B++", "B+++", "++++", "++++"], Stone::White);
        let before: Vec<_> = board.stones().collect();
        assert_eq!(
            play_move(&board, &Move::white(0, 0)),
            Err(InvalidMove::Suicide((0, 0)))
        );
        assert_eq!(board.stones().collect::<Vec<_>>(), before);
        assert_eq!(board.turn(), Stone::White);
    }
}
