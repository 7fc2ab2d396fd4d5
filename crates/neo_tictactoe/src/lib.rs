//! Neo's Tic-Tac-Toe - rules engine and presentation state.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`]; [`apply_move`] validates and
//!   places a mark, [`compute_outcome`] classifies a board.
//! - **Controller**: [`GameController`] owns the board, the turn and the
//!   transient animation markers, and schedules their expiry through an
//!   [`EffectTimer`].
//! - **View**: [`GameView`] is the snapshot a front end draws.
//!
//! # Example
//!
//! ```
//! use neo_tictactoe::{GameController, GameOutcome, Mark, Position, RecordingTimer};
//!
//! let mut game = GameController::new(RecordingTimer::new());
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::TopRight,
//! ] {
//!     game.handle_cell_select(pos);
//! }
//! assert_eq!(game.outcome(), GameOutcome::Won(Mark::A));
//! assert!(game.effects().confetti().is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod confetti;
mod controller;
mod effects;
mod outcome;
mod position;
mod roster;
pub mod rules;
mod types;
mod view;

pub use action::{MoveError, apply_move};
pub use confetti::{CONFETTI_GLYPHS, CONFETTI_PIECES, ConfettiPiece, scatter};
pub use controller::GameController;
pub use effects::{EffectDurations, EffectKind, EffectTimer, Effects, Expiry, RecordingTimer};
pub use outcome::GameOutcome;
pub use position::Position;
pub use roster::{PlayerProfile, Roster};
pub use rules::{check_winner, compute_outcome, is_full, winning_line};
pub use types::{Board, Mark, Square};
pub use view::{Banner, CellView, GameView};
