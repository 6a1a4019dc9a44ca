//! TUI-side state
//!
//! The panel itself lives in the event loop; the TUI only keeps the latest
//! snapshot and the cursor blink phase.

use crate::panel::PanelSnapshot;

pub struct App {
    pub snapshot: PanelSnapshot,
    pub cursor_visible: bool,
}

impl App {
    pub fn new(snapshot: PanelSnapshot) -> App {
        App {
            snapshot,
            cursor_visible: true,
        }
    }

    pub fn update_snapshot(&mut self, snapshot: PanelSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }
}
