//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here holds state, so the
//! outcome of a game is always recomputed from the board it describes.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::outcome::GameOutcome;
use super::types::Board;
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// Lines are checked in [`LINES`] order and the first complete line
/// decides the winner.
#[instrument(level = "trace")]
pub fn compute_outcome(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Won(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
