use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{MENU_INDENT, SELECTION_MARKER, colors};
use crate::interfaces::tui::ui::widgets::StatusIndicator;
use crate::panel::{MenuEntry, PanelSnapshot};

/// One menu line: marker, label and optional error badge
fn menu_line(snapshot: &PanelSnapshot, entry: MenuEntry) -> Line<'static> {
    let has_error = match entry {
        MenuEntry::System(system) => snapshot.has_error(system),
        MenuEntry::RebootAll => false,
    };
    let indicator = StatusIndicator::new(has_error, snapshot.is_selected(entry));

    let marker = if indicator.selected {
        SELECTION_MARKER
    } else {
        MENU_INDENT
    };

    let mut spans = vec![Span::styled(
        format!("{}{}", marker, entry.label()),
        indicator.style(),
    )];
    if has_error {
        spans.push(Span::styled(
            format!("  {}", indicator.badge()),
            Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

pub fn draw_main_screen(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = &app.snapshot;

    let mut lines = vec![Line::from("")];
    lines.extend(MenuEntry::all().map(|entry| menu_line(snapshot, entry)));

    // 重启进行中时菜单变暗
    let border_color = if snapshot.busy {
        colors::MUTED
    } else if snapshot.alarm_active {
        colors::ERROR
    } else {
        colors::PRIMARY
    };

    let menu = Paragraph::new(lines)
        .style(Style::default().bg(colors::BACKGROUND))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );

    frame.render_widget(menu, area);
}
