//! User interfaces
//!
//! Presentation adapters that render `PanelSnapshot`s and forward key
//! presses to the panel event loop.

#[cfg(feature = "tui")]
pub mod tui;
