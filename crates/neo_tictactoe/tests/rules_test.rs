//! Exhaustive tests for the rules engine.

use std::collections::HashSet;

use neo_tictactoe::rules::LINES;
use neo_tictactoe::{
    Board, GameOutcome, Mark, MoveError, Position, Square, apply_move, compute_outcome, is_full,
};
use strum::IntoEnumIterator;

/// Decodes `code` (0..3^9) as a base-3 board.
fn board_from_code(mut code: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in squares.iter_mut() {
        *square = match code % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Mark::A),
            _ => Square::Occupied(Mark::B),
        };
        code /= 3;
    }
    Board::from_squares(squares)
}

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(board_from_code)
}

fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
}

fn first_line_mark(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|[a, b, c]| match board.get(*a) {
        Square::Occupied(mark) if board.get(*b) == board.get(*a) && board.get(*c) == board.get(*a) => {
            Some(mark)
        }
        _ => None,
    })
}

#[test]
fn test_outcome_classification_over_all_boards() {
    let mut seen = 0;
    for board in all_boards() {
        seen += 1;
        let outcome = compute_outcome(&board);
        match outcome {
            GameOutcome::Won(mark) => {
                assert!(has_line(&board, mark));
                assert_eq!(first_line_mark(&board), Some(mark));
            }
            GameOutcome::Draw => {
                assert!(is_full(&board));
                assert!(!has_line(&board, Mark::A) && !has_line(&board, Mark::B));
            }
            GameOutcome::InProgress => {
                assert!(!is_full(&board));
                assert!(!has_line(&board, Mark::A) && !has_line(&board, Mark::B));
            }
        }
        // Deterministic: same board, same answer.
        assert_eq!(compute_outcome(&board), outcome);
    }
    assert_eq!(seen, 19_683);
}

#[test]
fn test_occupied_square_never_changes_board() {
    for board in all_boards() {
        for pos in Position::ALL {
            if board.is_empty(pos) {
                continue;
            }
            for mark in Mark::iter() {
                let result = apply_move(&board, mark, pos);
                assert!(matches!(
                    result,
                    Err(MoveError::CellOccupied(p)) if p == pos
                ) || result == Err(MoveError::GameAlreadyOver));
            }
        }
    }
}

#[test]
fn test_decided_board_refuses_every_move() {
    for board in all_boards().filter(|b| compute_outcome(b) != GameOutcome::InProgress) {
        for pos in Position::ALL {
            assert_eq!(apply_move(&board, Mark::A, pos), Err(MoveError::GameAlreadyOver));
        }
    }
}

#[test]
fn test_legal_play_never_produces_two_winners() {
    fn explore(board: Board, turn: Mark, seen: &mut HashSet<Board>) {
        if !seen.insert(board) {
            return;
        }
        assert!(
            !(has_line(&board, Mark::A) && has_line(&board, Mark::B)),
            "both marks have a line:\n{}",
            board.display()
        );
        let diff = board.count(Mark::A) as i32 - board.count(Mark::B) as i32;
        assert!(diff == 0 || diff == 1);

        for pos in Position::ALL {
            if let Ok(next) = apply_move(&board, turn, pos) {
                explore(next, turn.opponent(), seen);
            }
        }
    }

    let mut seen = HashSet::new();
    explore(Board::new(), Mark::A, &mut seen);
    // Number of distinct positions reachable in legal play.
    assert_eq!(seen.len(), 5_478);
}
