//! Derived game outcome.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Decided or undecided status of a game, derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line yet and at least one empty square.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Full board with no line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Won(mark) => Some(*mark),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won(mark) => write!(f, "{:?} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
