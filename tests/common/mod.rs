//! Hand-driven fakes for the panel capabilities

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reboot_terminal::panel::{
    Alarm, PanelController, PanelPorts, PanelSnapshot, PanelTiming, Presenter, Randomness,
    System, TimerExpired, TimerSlot, Timers,
};

/// Timers that only record what is armed; tests fire them explicitly
#[derive(Clone, Default)]
pub struct ManualTimers {
    inner: Arc<Mutex<ManualTimersInner>>,
}

#[derive(Default)]
struct ManualTimersInner {
    pending: HashMap<TimerSlot, (u64, Duration)>,
    next_token: u64,
    scheduled: Vec<(TimerSlot, Duration)>,
}

impl ManualTimers {
    /// Delay of the pending timer in `slot`
    pub fn pending_delay(&self, slot: TimerSlot) -> Option<Duration> {
        self.inner.lock().pending.get(&slot).map(|(_, delay)| *delay)
    }

    /// The expiry the pending timer in `slot` would deliver
    pub fn expiry(&self, slot: TimerSlot) -> Option<TimerExpired> {
        self.inner
            .lock()
            .pending
            .get(&slot)
            .map(|(token, _)| TimerExpired {
                slot,
                token: *token,
            })
    }

    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending.len()
    }

    /// Every `schedule` call so far, in order
    pub fn scheduled(&self) -> Vec<(TimerSlot, Duration)> {
        self.inner.lock().scheduled.clone()
    }
}

impl Timers for ManualTimers {
    fn schedule(&mut self, slot: TimerSlot, delay: Duration) {
        let mut inner = self.inner.lock();
        inner.next_token += 1;
        let token = inner.next_token;
        inner.pending.insert(slot, (token, delay));
        inner.scheduled.push((slot, delay));
    }

    fn cancel(&mut self, slot: TimerSlot) {
        self.inner.lock().pending.remove(&slot);
    }

    fn is_pending(&self, slot: TimerSlot) -> bool {
        self.inner.lock().pending.contains_key(&slot)
    }

    fn claim(&mut self, expired: TimerExpired) -> bool {
        let mut inner = self.inner.lock();
        match inner.pending.get(&expired.slot) {
            Some((token, _)) if *token == expired.token => {
                inner.pending.remove(&expired.slot);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmCall {
    Play,
    Stop,
}

#[derive(Clone, Default)]
pub struct RecordingAlarm {
    calls: Arc<Mutex<Vec<AlarmCall>>>,
}

impl RecordingAlarm {
    pub fn calls(&self) -> Vec<AlarmCall> {
        self.calls.lock().clone()
    }

    /// Whether the last call left the alarm looping
    pub fn is_playing(&self) -> bool {
        self.calls.lock().last() == Some(&AlarmCall::Play)
    }
}

impl Alarm for RecordingAlarm {
    fn play_looping(&mut self) {
        self.calls.lock().push(AlarmCall::Play);
    }

    fn stop(&mut self) {
        self.calls.lock().push(AlarmCall::Stop);
    }
}

#[derive(Clone, Default)]
pub struct RecordingPresenter {
    frames: Arc<Mutex<Vec<PanelSnapshot>>>,
}

impl RecordingPresenter {
    pub fn render_count(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn last(&self) -> Option<PanelSnapshot> {
        self.frames.lock().last().cloned()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, snapshot: PanelSnapshot) {
        self.frames.lock().push(snapshot);
    }
}

/// Randomness that replays queued answers, falling back to fixed ones
#[derive(Clone)]
pub struct ScriptedRandomness {
    delays: Arc<Mutex<VecDeque<Duration>>>,
    systems: Arc<Mutex<VecDeque<System>>>,
    fallback_delay: Duration,
    fallback_system: System,
}

impl Default for ScriptedRandomness {
    fn default() -> Self {
        Self {
            delays: Arc::default(),
            systems: Arc::default(),
            fallback_delay: Duration::from_secs(45),
            fallback_system: System::AudioDevices,
        }
    }
}

impl ScriptedRandomness {
    pub fn push_delay(&self, delay: Duration) {
        self.delays.lock().push_back(delay);
    }

    pub fn push_system(&self, system: System) {
        self.systems.lock().push_back(system);
    }
}

impl Randomness for ScriptedRandomness {
    fn error_delay(&mut self, min: Duration, max: Duration) -> Duration {
        self.delays
            .lock()
            .pop_front()
            .unwrap_or(self.fallback_delay)
            .clamp(min, max)
    }

    fn pick_system(&mut self) -> System {
        self.systems
            .lock()
            .pop_front()
            .unwrap_or(self.fallback_system)
    }
}

/// A controller wired to fakes, with handles to inspect them
pub struct Harness {
    pub controller: PanelController,
    pub timers: ManualTimers,
    pub alarm: RecordingAlarm,
    pub presenter: RecordingPresenter,
    pub randomness: ScriptedRandomness,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_timing(PanelTiming::default())
    }

    pub fn with_timing(timing: PanelTiming) -> Self {
        let timers = ManualTimers::default();
        let alarm = RecordingAlarm::default();
        let presenter = RecordingPresenter::default();
        let randomness = ScriptedRandomness::default();
        let controller = PanelController::new(
            timing,
            PanelPorts {
                timers: Box::new(timers.clone()),
                alarm: Box::new(alarm.clone()),
                presenter: Box::new(presenter.clone()),
                randomness: Box::new(randomness.clone()),
            },
        );
        Self {
            controller,
            timers,
            alarm,
            presenter,
            randomness,
        }
    }

    /// Fires the pending timer in `slot`; panics if nothing is armed there
    pub fn fire(&mut self, slot: TimerSlot) {
        let expired = self
            .timers
            .expiry(slot)
            .unwrap_or_else(|| panic!("no pending timer in {:?}", slot));
        self.controller.on_timer(expired);
    }

    /// Forces an error on `system` through the error timer
    pub fn inject_error(&mut self, system: System) {
        self.randomness.push_system(system);
        if !self.timers.is_pending(TimerSlot::ErrorInjection) {
            self.controller.schedule_next_error();
        }
        self.fire(TimerSlot::ErrorInjection);
    }

    /// Asserts the alarm invariant against both state and the fake alarm
    pub fn assert_alarm_invariant(&self) {
        let state = self.controller.state();
        assert_eq!(state.alarm_active(), state.any_error());
        assert_eq!(self.alarm.is_playing(), state.any_error());
    }
}
