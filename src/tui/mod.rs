//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::{Action, key_action, move_cursor};
pub use ui::{CELL_HEIGHT, CELL_WIDTH, Palette, board_area, cell_at, cell_rect, draw};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

use crate::session::Session;

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when setup or the event loop fails.
#[instrument(skip(session))]
pub fn run_tui(session: Session) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let _restore = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = %app.session().score(), "TUI closed");
    res
}

/// Leaves raw mode and the alternate screen when dropped, including while
/// unwinding from a panic.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        ) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Draw-then-read loop. Each event is handled to completion before the next
/// frame is drawn.
fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| {
            app.set_viewport(frame.area());
            ui::draw(frame, &app.snapshot(), app.cursor());
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
