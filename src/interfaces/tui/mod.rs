//! Terminal User Interface (TUI) module
//!
//! Renders the reboot panel and forwards key presses to the panel event
//! loop. The cursor blink runs on its own interval, so the screen keeps
//! animating while a reboot is in progress.

use std::io::{self, Stderr};

use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::watch;
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
mod ui;

use crate::config::get_config;
use crate::errors::PanelError;
use crate::panel::PanelSnapshot;
use crate::panel::timing::CURSOR_BLINK_INTERVAL;
use crate::runtime::{PanelHandle, PanelRuntime};
use app::App;
use event_handler::{KeyAction, handle_key_event};
use ui::ui;

type PanelTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
///
/// Reads the installed configuration; call `init_config` first.
pub async fn run_tui() -> Result<(), PanelError> {
    let config = get_config();

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Start the panel and run the UI against it
    let (runtime, handle, snapshots) = PanelRuntime::from_config(&config);
    let runtime_task = tokio::spawn(runtime.run());

    let mut app = App::new(snapshots.borrow().clone());
    let res = run_app(&mut terminal, &mut app, &handle, snapshots).await;

    handle.shutdown();
    let joined = runtime_task.await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let controller = joined
        .map_err(|e| PanelError::runtime(format!("Panel event loop failed: {}", e)))?;
    info!(
        "Session ended after {} reboot(s)",
        controller.state().history().len()
    );

    res.map_err(PanelError::from)
}

/// Main application loop
async fn run_app(
    terminal: &mut PanelTerminal,
    app: &mut App,
    handle: &PanelHandle,
    mut snapshots: watch::Receiver<PanelSnapshot>,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut blink = tokio::time::interval(CURSOR_BLINK_INTERVAL);

    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key) {
                        KeyAction::Panel(input) => {
                            if !handle.send(input) {
                                debug!("Panel event loop is gone, leaving TUI");
                                return Ok(());
                            }
                        }
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Ignore => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            changed = snapshots.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                app.update_snapshot(snapshots.borrow_and_update().clone());
            }
            _ = blink.tick() => app.toggle_cursor(),
        }
    }
}
