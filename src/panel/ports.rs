//! Capabilities the controller drives
//!
//! The controller never sleeps, plays audio or draws on its own; it goes
//! through these traits.

use std::time::Duration;

use super::state::PanelSnapshot;
use super::system::System;

/// Independent one-shot timers the controller can arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Random error injection
    ErrorInjection,
    /// End of the reboot in progress
    RebootStep,
    /// Return of the status line to idle after a completion message
    StatusReset,
    /// Hiding the latest history entry
    HistoryClear,
}

/// Delivery of an expired timer
///
/// `token` identifies which arming of the slot fired; a delivery whose token
/// no longer matches the pending one is stale and must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerExpired {
    pub slot: TimerSlot,
    pub token: u64,
}

/// Schedule-once timer service
///
/// Each slot has at most one pending timer. Scheduling a slot that is already
/// pending replaces it.
pub trait Timers: Send {
    fn schedule(&mut self, slot: TimerSlot, delay: Duration);

    fn cancel(&mut self, slot: TimerSlot);

    fn is_pending(&self, slot: TimerSlot) -> bool;

    /// Accepts an expiry if it belongs to the currently pending timer of its slot.
    /// The slot is no longer pending afterwards.
    fn claim(&mut self, expired: TimerExpired) -> bool;

    fn cancel_all(&mut self) {
        for slot in [
            TimerSlot::ErrorInjection,
            TimerSlot::RebootStep,
            TimerSlot::StatusReset,
            TimerSlot::HistoryClear,
        ] {
            self.cancel(slot);
        }
    }
}

/// Looping alarm sound
pub trait Alarm: Send {
    fn play_looping(&mut self);
    fn stop(&mut self);
}

/// Render hook called after every state change
pub trait Presenter: Send {
    fn render(&mut self, snapshot: PanelSnapshot);
}

/// Source of randomness for error injection
pub trait Randomness: Send {
    /// A delay drawn uniformly from `[min, max]`
    fn error_delay(&mut self, min: Duration, max: Duration) -> Duration;

    /// One of the real systems, uniformly
    fn pick_system(&mut self) -> System;
}

/// The capabilities a controller is built with
pub struct PanelPorts {
    pub timers: Box<dyn Timers>,
    pub alarm: Box<dyn Alarm>,
    pub presenter: Box<dyn Presenter>,
    pub randomness: Box<dyn Randomness>,
}
