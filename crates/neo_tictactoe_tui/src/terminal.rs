//! Raw-mode terminal setup with guaranteed teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Once;
use tracing::{error, warn};

/// Named teardown action.
pub(crate) type RestoreStep<'a> = (&'static str, Box<dyn FnOnce() -> io::Result<()> + 'a>);

static PANIC_HOOK: Once = Once::new();

/// RAII guard owning the raw-mode, alternate-screen terminal.
///
/// Dropping the guard restores the terminal, including while unwinding
/// from a panic. A panic hook also restores it before the panic message
/// is printed, so the message lands on the normal screen.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen.
    ///
    /// If any setup step fails, whatever was already switched on is
    /// switched off again before the error is returned.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let setup = (|| {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        })();

        match setup {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(e) => {
                if let Err(restore_err) = restore_terminal() {
                    warn!(error = %restore_err, "Terminal restore after failed setup");
                }
                Err(e)
            }
        }
    }

    /// The wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restores the terminal now, reporting the first failed step.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = restore_terminal() {
            error!(error = %e, "Terminal restore failed");
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the
/// cursor. Every step runs even if an earlier one fails.
pub fn restore_terminal() -> io::Result<()> {
    run_restore_steps(vec![
        restore_step("disable raw mode", disable_raw_mode),
        restore_step("leave alternate screen", || {
            let mut stdout = io::stdout();
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
        }),
        restore_step("show cursor", || {
            let mut stdout = io::stdout();
            execute!(stdout, Show)
        }),
    ])
}

pub(crate) fn restore_step<'a>(
    name: &'static str,
    step: impl FnOnce() -> io::Result<()> + 'a,
) -> RestoreStep<'a> {
    (name, Box::new(step))
}

/// Runs `steps` in order. Returns the first error once all have run.
pub(crate) fn run_restore_steps(steps: Vec<RestoreStep<'_>>) -> io::Result<()> {
    let mut first_err = None;
    for (name, step) in steps {
        if let Err(e) = step() {
            warn!(step = name, error = %e, "Terminal restore step failed");
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));
    });
}
