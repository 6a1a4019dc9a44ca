//! 可复用 UI 组件

mod status_indicator;

pub use status_indicator::{StatusIndicator, status_style};
