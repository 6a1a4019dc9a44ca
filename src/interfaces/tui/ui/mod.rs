// UI submodules
mod common;
mod main_screen;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use main_screen::draw_main_screen;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use super::constants::colors;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BACKGROUND)),
        frame.area(),
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(7), // Menu
            Constraint::Length(3), // Status, history, cursor
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_main_screen(frame, app, main_chunks[1]);
    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, main_chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{PanelState, System};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_menu_and_idle_status() {
        let app = App::new(PanelState::new().snapshot());
        let screen = render(&app);
        assert!(screen.contains(">>>   audio devices"));
        assert!(screen.contains("camera system"));
        assert!(screen.contains("Reboot All Systems"));
        assert!(screen.contains(">>> all systems operational..."));
        assert!(!screen.contains("[ERROR]"));
    }

    #[test]
    fn test_renders_error_badge_and_alarm() {
        let mut snapshot = PanelState::new().snapshot();
        snapshot.error_flags[System::Ventilation.index()] = true;
        snapshot.alarm_active = true;
        let app = App::new(snapshot);
        let screen = render(&app);
        assert!(screen.contains("ventilation  [ERROR]"));
        assert!(screen.contains("[ALARM]"));
    }
}
