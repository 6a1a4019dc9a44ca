//! Panel event loop
//!
//! `PanelRuntime` owns the controller and is the single task that mutates
//! panel state. Input from the presentation layer and timer expiries arrive
//! on one channel and are handled strictly in order.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tracing::{debug, info};

use super::alarm::{BellAlarm, SilentAlarm};
use super::presenter::WatchPresenter;
use super::random::ThreadRandomness;
use super::timers::TokioTimers;
use crate::config::StaticConfig;
use crate::panel::{
    Alarm, PanelController, PanelInput, PanelPorts, PanelSnapshot, PanelTiming, Presenter,
    Randomness, TimerExpired,
};

/// Everything the event loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Input(PanelInput),
    Timer(TimerExpired),
    Shutdown,
}

/// Sending side of the event loop, held by the presentation layer
#[derive(Debug, Clone)]
pub struct PanelHandle {
    tx: UnboundedSender<PanelEvent>,
}

impl PanelHandle {
    /// Forwards an input; returns false once the event loop has stopped
    pub fn send(&self, input: PanelInput) -> bool {
        self.tx.send(PanelEvent::Input(input)).is_ok()
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(PanelEvent::Shutdown);
    }
}

pub struct PanelRuntime {
    controller: PanelController,
    events: UnboundedReceiver<PanelEvent>,
}

impl PanelRuntime {
    /// Builds a runtime with tokio timers and the given capabilities
    pub fn new(
        timing: PanelTiming,
        alarm: Box<dyn Alarm>,
        presenter: Box<dyn Presenter>,
        randomness: Box<dyn Randomness>,
    ) -> (Self, PanelHandle) {
        let (tx, events) = mpsc::unbounded_channel();
        let ports = PanelPorts {
            timers: Box::new(TokioTimers::new(tx.clone())),
            alarm,
            presenter,
            randomness,
        };
        let runtime = Self {
            controller: PanelController::new(timing, ports),
            events,
        };
        (runtime, PanelHandle { tx })
    }

    /// Builds the production runtime from configuration
    ///
    /// Returns the snapshot receiver the presentation layer renders from.
    pub fn from_config(
        config: &StaticConfig,
    ) -> (Self, PanelHandle, watch::Receiver<PanelSnapshot>) {
        let alarm: Box<dyn Alarm> = if config.alarm.enabled {
            Box::new(BellAlarm::new(config.alarm.bell_interval()))
        } else {
            Box::new(SilentAlarm::default())
        };
        let (presenter, snapshots) = WatchPresenter::new();
        let (runtime, handle) = Self::new(
            config.panel.timing(),
            alarm,
            Box::new(presenter),
            Box::new(ThreadRandomness),
        );
        (runtime, handle, snapshots)
    }

    pub fn controller(&self) -> &PanelController {
        &self.controller
    }

    /// Processes one event. Returns false when the loop should stop.
    pub fn dispatch(&mut self, event: PanelEvent) -> bool {
        match event {
            PanelEvent::Input(input) => {
                debug!("Input: {:?}", input);
                self.controller.handle_input(input);
                true
            }
            PanelEvent::Timer(expired) => {
                self.controller.on_timer(expired);
                true
            }
            PanelEvent::Shutdown => false,
        }
    }

    /// Runs until `PanelHandle::shutdown` is called
    ///
    /// The timers hold a sender too, so dropping every handle does not end the loop.
    pub async fn run(mut self) -> PanelController {
        info!("Panel event loop started");
        self.controller.start();

        while let Some(event) = self.events.recv().await {
            if !self.dispatch(event) {
                break;
            }
        }

        self.controller.shutdown();
        info!("Panel event loop stopped");
        self.controller
    }
}
