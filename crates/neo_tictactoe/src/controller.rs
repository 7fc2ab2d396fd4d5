//! Presentation state controller.
//!
//! Turns rules-engine results into a turn-taking loop and schedules the
//! short-lived visual cues that accompany each event.

use super::action::apply_move;
use super::confetti::scatter;
use super::effects::{EffectDurations, EffectKind, EffectTimer, Effects, Expiry};
use super::rules::{compute_outcome, winning_line};
use super::view::{Banner, CellView, GameView};
use super::{Board, GameOutcome, Mark, Position, Roster};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// Drives a single game board and its animation markers.
///
/// All mutation happens through [`handle_cell_select`](Self::handle_cell_select),
/// [`handle_restart`](Self::handle_restart) and [`expire`](Self::expire), each
/// applied one at a time by the host's event loop.
#[derive(Debug)]
pub struct GameController<T: EffectTimer> {
    board: Board,
    turn: Mark,
    effects: Effects,
    durations: EffectDurations,
    roster: Roster,
    timer: T,
    rng: StdRng,
}

impl<T: EffectTimer> GameController<T> {
    /// Creates a controller at the initial position: empty board, `A` to move.
    #[instrument(skip(timer))]
    pub fn new(timer: T) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::A,
            effects: Effects::new(),
            durations: EffectDurations::default(),
            roster: Roster::default(),
            timer,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the effect durations.
    pub fn with_durations(mut self, durations: EffectDurations) -> Self {
        self.durations = durations;
        self
    }

    /// Replaces the player roster.
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Seeds the confetti layout.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Outcome, recomputed from the board on every call.
    pub fn outcome(&self) -> GameOutcome {
        compute_outcome(&self.board)
    }

    /// Visible effects.
    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Player roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Effect durations in use.
    pub fn durations(&self) -> &EffectDurations {
        &self.durations
    }

    /// The timer expiries are scheduled on.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the timer.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Places the current mark at `position`.
    ///
    /// Ignored if the square is occupied or the game is decided. Returns
    /// true when the move was accepted.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn handle_cell_select(&mut self, position: Position) -> bool {
        let before = self.outcome();
        let board = match apply_move(&self.board, self.turn, position) {
            Ok(board) => board,
            Err(error) => {
                debug!(%error, "Ignoring move");
                return false;
            }
        };

        self.board = board;
        self.turn = self.turn.opponent();

        let generation = self.effects.set_bounce(position);
        self.schedule(EffectKind::Bounce, generation);

        self.react_to_outcome(before, self.outcome());
        true
    }

    /// Resets to the initial position and pulses the restart control.
    #[instrument(skip(self))]
    pub fn handle_restart(&mut self) {
        info!("Restarting game");
        self.board = Board::new();
        self.turn = Mark::A;
        self.effects.clear(EffectKind::Bounce);

        let generation = self.effects.set_restart_pulse();
        self.schedule(EffectKind::RestartPulse, generation);
    }

    /// Delivers a timer expiry. Returns true if a marker was cleared.
    pub fn expire(&mut self, expiry: Expiry) -> bool {
        self.effects.expire(expiry)
    }

    /// Builds the render model for the current state.
    pub fn view(&self) -> GameView {
        let outcome = self.outcome();
        let line = winning_line(&self.board);
        let bounce = self.effects.bounce();

        let cells = Position::ALL.map(|position| {
            let mark = self.board.get(position).mark();
            CellView {
                position,
                mark,
                bouncing: bounce == Some(position),
                selectable: mark.is_none() && !outcome.is_decided(),
                in_winning_line: line.is_some_and(|l| l.contains(&position)),
            }
        });

        let banner = match outcome {
            GameOutcome::InProgress => Banner::Turn {
                mark: self.turn,
                profile: self.roster.profile(self.turn).clone(),
            },
            GameOutcome::Won(mark) => Banner::Winner {
                mark,
                profile: self.roster.profile(mark).clone(),
            },
            GameOutcome::Draw => Banner::Draw,
        };

        GameView {
            cells,
            outcome,
            banner,
            restart_pulse: self.effects.restart_pulse(),
            confetti: self.effects.confetti().map(<[_]>::to_vec).unwrap_or_default(),
            shake: self.effects.shake(),
        }
    }

    // Fires only on the edge out of InProgress, never while a decided
    // outcome merely persists.
    fn react_to_outcome(&mut self, before: GameOutcome, after: GameOutcome) {
        if before.is_decided() || !after.is_decided() {
            return;
        }
        info!(outcome = %after, "Game decided");
        let (kind, generation) = match after.winner() {
            Some(_) => {
                let pieces = scatter(&mut self.rng);
                (EffectKind::Confetti, self.effects.set_confetti(pieces))
            }
            None => (EffectKind::Shake, self.effects.set_shake()),
        };
        self.schedule(kind, generation);
    }

    fn schedule(&mut self, kind: EffectKind, generation: u64) {
        let expiry = Expiry::new(kind, generation, self.durations.for_kind(kind));
        debug!(?expiry, "Scheduling expiry");
        self.timer.schedule(expiry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingTimer;

    fn controller() -> GameController<RecordingTimer> {
        GameController::new(RecordingTimer::new()).with_seed(1)
    }

    #[test]
    fn test_initial_state() {
        let game = controller();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Mark::A);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(game.effects().is_idle());
    }

    #[test]
    fn test_move_schedules_bounce() {
        let mut game = controller();
        assert!(game.handle_cell_select(Position::Center));
        assert_eq!(game.effects().bounce(), Some(Position::Center));

        let expiry = game.timer().last_of(EffectKind::Bounce).expect("bounce scheduled");
        assert_eq!(expiry.after, std::time::Duration::from_millis(400));
        assert!(game.expire(expiry));
        assert_eq!(game.effects().bounce(), None);
    }

    #[test]
    fn test_restart_clears_bounce_and_pulses() {
        let mut game = controller();
        game.handle_cell_select(Position::Center);
        game.handle_restart();
        assert_eq!(game.effects().bounce(), None);
        assert!(game.effects().restart_pulse());
        assert_eq!(game.turn(), Mark::A);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_view_marks_selectable_cells() {
        let mut game = controller();
        game.handle_cell_select(Position::TopLeft);
        let view = game.view();
        assert!(!view.cell(Position::TopLeft).selectable);
        assert!(view.cell(Position::TopLeft).bouncing);
        assert!(view.cell(Position::Center).selectable);
        assert_eq!(view.banner.to_string(), "Current Turn: Log 🪵");
    }
}
