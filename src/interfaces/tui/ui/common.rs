use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{CURSOR, PROMPT, colors, status_text};
use crate::interfaces::tui::ui::widgets::status_style;

/// Draw title: "system restart / menu>>>" with alarm and busy markers
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut heading = vec![Span::styled(
        "system restart",
        Style::default().fg(colors::PRIMARY).bold(),
    )];
    if app.snapshot.alarm_active {
        heading.push(Span::styled("  ", Style::default()));
        heading.push(Span::styled(
            format!("[{}]", status_text::ALARM),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        ));
    }
    if app.snapshot.busy {
        heading.push(Span::styled("  ", Style::default()));
        heading.push(Span::styled(
            format!("[{}]", status_text::BUSY),
            Style::default().fg(colors::PENDING).bold(),
        ));
    }

    let title_text = vec![
        Line::from(heading),
        Line::from(Span::styled(
            format!("menu{}", PROMPT),
            Style::default().fg(colors::PRIMARY),
        )),
    ];

    let title = Paragraph::new(title_text)
        .style(Style::default().bg(colors::BACKGROUND))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(colors::MUTED)),
        );

    frame.render_widget(title, area);
}

/// Draw status line, latest history entry and the blinking cursor
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = &app.snapshot.status;

    let mut lines = vec![Line::from(Span::styled(
        format!("{} {}", PROMPT, status.text),
        status_style(status.kind),
    ))];

    if let Some(history) = &app.snapshot.latest_history {
        lines.push(Line::from(Span::styled(
            format!("{} {}", PROMPT, history),
            Style::default().fg(colors::PRIMARY),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let cursor_style = if app.cursor_visible {
        Style::default().fg(colors::HIGHLIGHT)
    } else {
        Style::default().fg(colors::BACKGROUND)
    };
    lines.push(Line::from(Span::styled(CURSOR, cursor_style)));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(colors::BACKGROUND));
    frame.render_widget(paragraph, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let shortcuts = [
        ("Up/Down", "Navigate", Color::Cyan),
        ("Enter", "Reboot", Color::Green),
        ("q", "Quit", Color::Magenta),
    ];

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
