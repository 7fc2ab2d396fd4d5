//! Application state.

use crossterm::event::KeyCode;
use neo_tictactoe::{EffectTimer, Expiry, GameController, GameView, Position};
use tracing::{debug, instrument};

use crate::input::{Action, action_for};

/// Front-end state wrapped around a game controller.
#[derive(Debug)]
pub struct App<T: EffectTimer> {
    controller: GameController<T>,
    cursor: Position,
    tick: u64,
    should_quit: bool,
}

impl<T: EffectTimer> App<T> {
    /// Creates an application around `controller`.
    pub fn new(controller: GameController<T>) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            tick: 0,
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &GameController<T> {
        &self.controller
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Frames drawn so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render model for the current frame.
    pub fn view(&self) -> GameView {
        self.controller.view()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key, self.cursor) else {
            return;
        };
        debug!(?action, "Key mapped");
        match action {
            Action::Select(position) => {
                self.cursor = position;
                self.controller.handle_cell_select(position);
            }
            Action::MoveCursor(position) => self.cursor = position,
            Action::Restart => self.controller.handle_restart(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Delivers a timer expiry to the controller.
    pub fn handle_expiry(&mut self, expiry: Expiry) {
        self.controller.expire(expiry);
    }

    /// Advances the frame counter.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_tictactoe::{EffectKind, GameOutcome, Mark, RecordingTimer};

    fn app() -> App<RecordingTimer> {
        App::new(GameController::new(RecordingTimer::new()).with_seed(3))
    }

    #[test]
    fn test_digit_keys_play_moves() {
        let mut app = app();
        for key in ['1', '5', '2', '4', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.controller().outcome(), GameOutcome::Won(Mark::A));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_cursor_select_and_restart() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert!(!app.controller().board().is_empty(Position::TopCenter));

        app.handle_key(KeyCode::Char('r'));
        assert!(app.controller().board().is_empty(Position::TopCenter));
        assert!(app.controller().effects().restart_pulse());
    }

    #[test]
    fn test_expiry_clears_marker() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        let expiry = app
            .controller()
            .timer()
            .last_of(EffectKind::Bounce)
            .expect("bounce scheduled");
        app.handle_expiry(expiry);
        assert_eq!(app.controller().effects().bounce(), None);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
