//! Render model produced by the controller.
//!
//! A [`GameView`] is a snapshot: building one never changes game state,
//! so a front end may rebuild it every frame.

use super::confetti::ConfettiPiece;
use super::{GameOutcome, Mark, Position, PlayerProfile};

/// One square as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Where the square sits.
    pub position: Position,
    /// Mark in the square, if any.
    pub mark: Option<Mark>,
    /// The mark was just placed and is bouncing.
    pub bouncing: bool,
    /// Selecting the square would be accepted.
    pub selectable: bool,
    /// The square is part of the winning line.
    pub in_winning_line: bool,
}

/// Status line above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Game in progress; `mark` moves next.
    Turn {
        /// Mark to move.
        mark: Mark,
        /// Its display profile.
        profile: PlayerProfile,
    },
    /// Game won by `mark`.
    Winner {
        /// Winning mark.
        mark: Mark,
        /// Its display profile.
        profile: PlayerProfile,
    },
    /// Game drawn.
    Draw,
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Banner::Turn { profile, .. } => {
                write!(f, "Current Turn: {} {}", profile.name(), profile.emoji())
            }
            Banner::Winner { profile, .. } => write!(f, "{} Wins!", profile.name()),
            Banner::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    /// Squares in index order.
    pub cells: [CellView; 9],
    /// Outcome the banner was built from.
    pub outcome: GameOutcome,
    /// Status line.
    pub banner: Banner,
    /// Restart control is pulsing.
    pub restart_pulse: bool,
    /// Confetti to draw, empty when not celebrating.
    pub confetti: Vec<ConfettiPiece>,
    /// Board is shaking.
    pub shake: bool,
}

impl GameView {
    /// Cell at `position`.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.to_index()]
    }
}
