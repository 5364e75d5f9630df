//! Exhaustive checks of the rules over every reachable board.

use std::collections::HashSet;

use tictactoe_core::rules::{LINES, evaluate, is_draw, is_full};
use tictactoe_core::{Board, BoardView, Position, Square, Status, changed_position};

/// Every board reachable from the empty board through legal clicks.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        let view = BoardView::new(&board);
        for pos in Position::ALL {
            if let Some(next) = view.click(pos) {
                assert_eq!(changed_position(&board, &next), Some(pos));
                assert_eq!(next.occupied(), board.occupied() + 1);
                stack.push(next);
            }
        }
    }
    seen.into_iter().collect()
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_exactly_one_status_holds() {
    for board in reachable_boards() {
        let won = evaluate(&board).winner().is_some();
        let draw = is_draw(&board);
        let next = !won && !is_full(&board);
        assert_eq!(
            [won, draw, next].iter().filter(|b| **b).count(),
            1,
            "board {board:?}"
        );

        let status = Status::of(&board);
        match status {
            Status::Won(_) => assert!(won),
            Status::Draw => assert!(draw),
            Status::Next(_) => assert!(next),
        }
    }
}

#[test]
fn test_winner_matches_a_complete_line() {
    for board in reachable_boards() {
        let verdict = evaluate(&board);
        let complete = LINES.iter().find(|line| {
            let sq = board.get(line[0]);
            sq != Square::Empty && line.iter().all(|pos| board.get(*pos) == sq)
        });
        match complete {
            Some(line) => {
                assert_eq!(verdict.line(), Some(*line));
                assert_eq!(verdict.winner(), board.get(line[0]).player());
            }
            None => {
                assert_eq!(verdict.winner(), None);
                assert!(verdict.positions().is_empty());
            }
        }
    }
}
