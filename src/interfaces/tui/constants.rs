//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 菜单缩进（未选中项）
pub const MENU_INDENT: &str = "      ";

/// 选中项前缀
pub const SELECTION_MARKER: &str = ">>>   ";

/// 终端提示符
pub const PROMPT: &str = ">>>";

/// 闪烁光标
pub const CURSOR: &str = "|";

/// 颜色主题（绿色终端风格）
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Green;
    /// 选中项 / 全部重启完成
    pub const HIGHLIGHT: Color = Color::LightGreen;
    /// 重启中 / 单项重启完成
    pub const PENDING: Color = Color::Yellow;
    /// 故障
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 背景色
    pub const BACKGROUND: Color = Color::Black;
}

/// 状态文本
pub mod status_text {
    /// 故障标记
    pub const ERROR_BADGE: &str = "[ERROR]";
    /// 报警中
    pub const ALARM: &str = "ALARM";
    /// 重启进行中
    pub const BUSY: &str = "BUSY";
}
