//! Panel controller
//!
//! Owns `PanelState` and is its only mutator. Reboots are split into
//! steps: starting a reboot arms `TimerSlot::RebootStep`, and its expiry
//! finishes the reboot. The caller keeps rendering and reading input in the
//! meantime.
//!
//! ```text
//! Idle --activate--> Rebooting --RebootStep--> Completed --StatusReset--> Idle
//! ```

use tracing::{debug, info, warn};

use super::ports::{Alarm, PanelPorts, Presenter, Randomness, TimerExpired, TimerSlot, Timers};
use super::state::{Direction, PanelSnapshot, PanelState, RebootPhase, RebootTarget, StatusLine};
use super::system::{MenuEntry, System};
use super::timing::PanelTiming;

/// Input events forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    NavigateUp,
    NavigateDown,
    Activate,
}

pub struct PanelController {
    state: PanelState,
    timing: PanelTiming,
    timers: Box<dyn Timers>,
    alarm: Box<dyn Alarm>,
    presenter: Box<dyn Presenter>,
    randomness: Box<dyn Randomness>,
}

impl PanelController {
    pub fn new(timing: PanelTiming, ports: PanelPorts) -> Self {
        Self {
            state: PanelState::new(),
            timing,
            timers: ports.timers,
            alarm: ports.alarm,
            presenter: ports.presenter,
            randomness: ports.randomness,
        }
    }

    /// Renders the initial state and arms the first error timer
    pub fn start(&mut self) {
        info!(
            "Panel started, first error in {:?}..={:?}",
            self.timing.error_delay.min, self.timing.error_delay.max
        );
        self.render();
        self.schedule_next_error();
    }

    /// Stops the alarm and disarms every timer
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        if self.state.alarm_active() {
            self.alarm.stop();
            self.state.set_alarm_active(false);
        }
        info!("Panel shut down");
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn timing(&self) -> &PanelTiming {
        &self.timing
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.state.snapshot()
    }

    pub fn handle_input(&mut self, input: PanelInput) {
        match input {
            PanelInput::NavigateUp => self.navigate(Direction::Up),
            PanelInput::NavigateDown => self.navigate(Direction::Down),
            PanelInput::Activate => self.activate(),
        }
    }

    pub fn navigate(&mut self, direction: Direction) {
        if self.state.is_busy() {
            debug!("Ignoring navigation {:?} while busy", direction);
            return;
        }
        if self.state.step_selection(direction) {
            self.render();
        }
    }

    /// Reboots whatever the selection points at
    pub fn activate(&mut self) {
        if self.state.is_busy() {
            debug!("Ignoring activation while busy");
            return;
        }
        match self.state.selected_entry() {
            MenuEntry::System(system) => self.reboot_one(system),
            MenuEntry::RebootAll => self.reboot_all(),
        }
    }

    /// Begins rebooting one system; it finishes when `TimerSlot::RebootStep` expires
    pub fn reboot_one(&mut self, system: System) {
        self.begin_reboot(RebootTarget::One(system));
    }

    /// Begins rebooting every system
    pub fn reboot_all(&mut self) {
        self.begin_reboot(RebootTarget::All);
    }

    /// Arms the error timer with a random delay, replacing any pending one
    pub fn schedule_next_error(&mut self) {
        let range = self.timing.error_delay;
        let delay = self.randomness.error_delay(range.min, range.max);
        self.timers.schedule(TimerSlot::ErrorInjection, delay);
        debug!("Next error injection in {:?}", delay);
    }

    /// Injects an error into one random system, unless the panel is busy
    /// or an error is already active. Dropped injections are not rescheduled.
    pub fn on_error_timer_fired(&mut self) {
        if self.state.is_busy() || self.state.any_error() {
            debug!(
                "Dropping error injection (busy: {}, error active: {})",
                self.state.is_busy(),
                self.state.any_error()
            );
            return;
        }

        let system = self.randomness.pick_system();
        self.state.set_error(system, true);
        self.sync_alarm();
        self.timers.cancel(TimerSlot::StatusReset);
        self.state.set_status(StatusLine::system_error(system));
        warn!("{} entered error state", system);
        self.render();
    }

    /// Dispatches a timer expiry; stale expiries are ignored
    pub fn on_timer(&mut self, expired: TimerExpired) {
        if !self.timers.claim(expired) {
            debug!("Ignoring stale timer {:?}", expired);
            return;
        }
        match expired.slot {
            TimerSlot::ErrorInjection => self.on_error_timer_fired(),
            TimerSlot::RebootStep => self.finish_reboot(),
            TimerSlot::StatusReset => {
                self.state.set_status(StatusLine::operational());
                self.render();
            }
            TimerSlot::HistoryClear => {
                self.state.hide_history();
                self.render();
            }
        }
    }

    fn begin_reboot(&mut self, target: RebootTarget) {
        if self.state.is_busy() {
            debug!("Reboot of {:?} rejected, another reboot is running", target);
            return;
        }

        let (status, duration) = match target {
            RebootTarget::One(system) => (StatusLine::rebooting(system), self.timing.boot_time),
            RebootTarget::All => (StatusLine::rebooting_all(), self.timing.reboot_all_time),
        };

        self.state.set_phase(RebootPhase::Rebooting(target));
        self.timers.cancel(TimerSlot::StatusReset);
        self.state.set_status(status);
        self.timers.schedule(TimerSlot::RebootStep, duration);
        info!("Reboot of {:?} started, takes {:?}", target, duration);
        self.render();
    }

    fn finish_reboot(&mut self) {
        let RebootPhase::Rebooting(target) = self.state.phase() else {
            debug!("Reboot step fired with no reboot in progress");
            return;
        };

        let hold = match target {
            RebootTarget::One(system) => {
                self.state.set_error(system, false);
                self.sync_alarm();
                self.state.set_status(StatusLine::reboot_complete(system));
                self.state
                    .push_history(format!("{} successfully rebooted.", system));
                self.timers
                    .schedule(TimerSlot::HistoryClear, self.timing.history_hold);
                self.timing.completion_hold
            }
            RebootTarget::All => {
                self.state.clear_errors();
                self.sync_alarm();
                self.state.set_status(StatusLine::all_reboot_complete());
                self.timing.reboot_all_completion_hold
            }
        };
        self.timers.schedule(TimerSlot::StatusReset, hold);

        self.state.set_phase(RebootPhase::Idle);
        info!("Reboot of {:?} complete", target);
        self.schedule_next_error();
        self.render();
    }

    /// Starts or stops the alarm so that it loops exactly while an error is active
    fn sync_alarm(&mut self) {
        let should_ring = self.state.any_error();
        if should_ring == self.state.alarm_active() {
            return;
        }
        if should_ring {
            self.alarm.play_looping();
        } else {
            self.alarm.stop();
        }
        self.state.set_alarm_active(should_ring);
    }

    fn render(&mut self) {
        self.presenter.render(self.state.snapshot());
    }
}
