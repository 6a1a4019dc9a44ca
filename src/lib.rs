//! Reboot Terminal - a themed terminal reboot panel
//!
//! Three simulated systems (audio devices, camera system, ventilation) fall
//! into an error state at random intervals. While any of them is in error an
//! alarm loops; the operator walks a small menu with the arrow keys and
//! reboots a single system or all of them, which clears the error after a
//! fixed delay.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `panel`: Domain state machine (`PanelController`) and its capability traits
//! - `runtime`: tokio-backed timers, alarm, presenter and the single-mutator event loop
//! - `interfaces`: Presentation adapters (TUI)
//! - `config`: Configuration management
//! - `system`: Logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod panel;
pub mod runtime;
pub mod system;
