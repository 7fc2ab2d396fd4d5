//! Move application for tic-tac-toe.
//!
//! A move never mutates the board it is applied to; the caller receives
//! the next board or the reason the move was refused.

use super::rules::compute_outcome;
use super::{Board, Mark, Position, Square};
use tracing::instrument;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The board already has a winner or is full.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// Places `turn`'s mark at `position`, returning the resulting board.
///
/// A decided game is refused before the target square is looked at.
#[instrument(fields(position = %position, turn = ?turn))]
pub fn apply_move(board: &Board, turn: Mark, position: Position) -> Result<Board, MoveError> {
    if compute_outcome(board).is_decided() {
        return Err(MoveError::GameAlreadyOver);
    }
    if !board.is_empty(position) {
        return Err(MoveError::CellOccupied(position));
    }
    Ok(board.with(position, Square::Occupied(turn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_square() {
        let board = Board::new();
        let next = apply_move(&board, Mark::A, Position::Center).expect("legal move");
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::A));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let board = apply_move(&Board::new(), Mark::A, Position::Center).expect("legal move");
        assert_eq!(
            apply_move(&board, Mark::B, Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_finished_game_rejected_even_on_occupied_square() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board = board.with(pos, Square::Occupied(Mark::A));
        }
        assert_eq!(
            apply_move(&board, Mark::B, Position::Center),
            Err(MoveError::GameAlreadyOver)
        );
        assert_eq!(
            apply_move(&board, Mark::B, Position::TopLeft),
            Err(MoveError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(MoveError::GameAlreadyOver.to_string(), "Game is already over");
    }
}
