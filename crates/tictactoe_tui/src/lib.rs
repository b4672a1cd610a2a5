//! Terminal front end for the tic-tac-toe engine.
//!
//! The [`App`] owns the one current snapshot. Each click or key press is
//! turned into a move, run through the engine, and the returned snapshot
//! replaces the held one before the next redraw.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, BoardLayout, action_for, move_cursor};
pub use ui::{board_layout, draw};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip_all, fields(policy = ?config.policy()))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut terminal = ratatui::init();
    with_cleanup(
        || execute!(std::io::stdout(), EnableMouseCapture),
        || run_app(&mut terminal, App::new(config)),
        || execute!(std::io::stdout(), DisableMouseCapture),
        ratatui::restore,
    )
}

/// Runs `body` between `enter` and `leave`, then always calls `restore`.
///
/// A failed `enter` skips `body`. The first error wins.
fn with_cleanup<T>(
    enter: impl FnOnce() -> std::io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> std::io::Result<()>,
    restore: impl FnOnce(),
) -> Result<T> {
    let res = enter().map_err(anyhow::Error::from).and_then(|()| body());
    let left = leave();
    restore();

    let value = res?;
    left?;
    Ok(value)
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        let mut layout = *app.layout();
        terminal.draw(|f| layout = ui::draw(f, &app))?;
        app.set_layout(layout);

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let event = event::read()?;
        if let Some(action) = input::action_for(&event, app.layout()) {
            debug!(?action, "Handling action");
            app.handle(action);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    #[test]
    fn test_restore_runs_when_enter_fails() {
        let restored = Cell::new(false);
        let ran = Cell::new(false);
        let res = with_cleanup(
            || Err(io::Error::other("no mouse")),
            || {
                ran.set(true);
                Ok(())
            },
            || Ok(()),
            || restored.set(true),
        );
        assert!(res.unwrap_err().to_string().contains("no mouse"));
        assert!(!ran.get());
        assert!(restored.get());
    }

    #[test]
    fn test_restore_runs_when_leave_fails() {
        let restored = Cell::new(false);
        let res = with_cleanup(
            || Ok(()),
            || Ok(7),
            || Err(io::Error::other("stuck")),
            || restored.set(true),
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_body_error_wins_over_leave_error() {
        let restored = Cell::new(false);
        let res: Result<()> = with_cleanup(
            || Ok(()),
            || Err(anyhow::anyhow!("loop failed")),
            || Err(io::Error::other("stuck")),
            || restored.set(true),
        );
        assert_eq!(res.unwrap_err().to_string(), "loop failed");
        assert!(restored.get());
    }

    #[test]
    fn test_value_passes_through() {
        let res = with_cleanup(|| Ok(()), || Ok(42), || Ok(()), || {});
        assert_eq!(res.unwrap(), 42);
    }
}
