//! Panel domain
//!
//! The state machine behind the reboot terminal, free of any terminal or
//! runtime code.

pub mod controller;
pub mod ports;
pub mod state;
pub mod system;
pub mod timing;

pub use controller::{PanelController, PanelInput};
pub use ports::{Alarm, PanelPorts, Presenter, Randomness, TimerExpired, TimerSlot, Timers};
pub use state::{
    Direction, PanelSnapshot, PanelState, RebootPhase, RebootTarget, StatusKind, StatusLine,
};
pub use system::{MenuEntry, System};
pub use timing::{ErrorDelayRange, PanelTiming};
