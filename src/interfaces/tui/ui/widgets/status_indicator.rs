//! 系统状态指示器
//!
//! 菜单项的故障标记以及状态栏的配色

use ratatui::style::{Color, Modifier, Style};

use crate::interfaces::tui::constants::{colors, status_text};
use crate::panel::StatusKind;

/// 状态栏颜色
pub fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Idle => colors::PRIMARY,
        StatusKind::Pending => colors::PENDING,
        StatusKind::Success => colors::PENDING,
        StatusKind::AllClear => colors::HIGHLIGHT,
        StatusKind::Alert => colors::ERROR,
    }
}

/// 状态栏样式
pub fn status_style(kind: StatusKind) -> Style {
    let style = Style::default().fg(status_color(kind));
    if kind == StatusKind::Alert {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// 菜单项指示器
pub struct StatusIndicator {
    /// 是否处于故障状态
    pub has_error: bool,
    /// 是否被选中
    pub selected: bool,
}

impl StatusIndicator {
    pub fn new(has_error: bool, selected: bool) -> Self {
        Self {
            has_error,
            selected,
        }
    }

    /// 故障标记文本（无故障时为空）
    pub fn badge(&self) -> &'static str {
        if self.has_error {
            status_text::ERROR_BADGE
        } else {
            ""
        }
    }

    /// 菜单项颜色：选中优先，其次故障
    pub fn color(&self) -> Color {
        if self.selected {
            colors::HIGHLIGHT
        } else if self.has_error {
            colors::ERROR
        } else {
            colors::PRIMARY
        }
    }

    pub fn style(&self) -> Style {
        let style = Style::default().fg(self.color());
        if self.selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_only_on_error() {
        assert_eq!(StatusIndicator::new(true, false).badge(), "[ERROR]");
        assert_eq!(StatusIndicator::new(false, true).badge(), "");
    }

    #[test]
    fn test_selection_overrides_error_color() {
        assert_eq!(StatusIndicator::new(true, false).color(), colors::ERROR);
        assert_eq!(StatusIndicator::new(true, true).color(), colors::HIGHLIGHT);
        assert_eq!(StatusIndicator::new(false, false).color(), colors::PRIMARY);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(StatusKind::Idle), Color::Green);
        assert_eq!(status_color(StatusKind::Pending), Color::Yellow);
        assert_eq!(status_color(StatusKind::Alert), Color::Red);
        assert_ne!(
            status_color(StatusKind::Success),
            status_color(StatusKind::AllClear)
        );
        assert_eq!(status_color(StatusKind::AllClear), colors::HIGHLIGHT);
    }
}
