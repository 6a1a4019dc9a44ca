//! tokio-backed one-shot timers
//!
//! Every armed slot is a spawned task that sleeps and then sends
//! `PanelEvent::Timer` back to the event loop. Re-arming or cancelling a slot
//! aborts its task; an expiry already sitting in the channel is rejected by
//! `claim` because its token is no longer the pending one.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::trace;

use super::event_loop::PanelEvent;
use crate::panel::{TimerExpired, TimerSlot, Timers};

struct PendingTimer {
    token: u64,
    handle: JoinHandle<()>,
}

pub struct TokioTimers {
    events: UnboundedSender<PanelEvent>,
    pending: HashMap<TimerSlot, PendingTimer>,
    next_token: u64,
}

impl TokioTimers {
    pub fn new(events: UnboundedSender<PanelEvent>) -> Self {
        Self {
            events,
            pending: HashMap::new(),
            next_token: 0,
        }
    }

    /// Number of armed slots
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Timers for TokioTimers {
    fn schedule(&mut self, slot: TimerSlot, delay: Duration) {
        self.cancel(slot);

        self.next_token += 1;
        let token = self.next_token;
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // 事件循环已退出时发送失败，忽略即可
            let _ = events.send(PanelEvent::Timer(TimerExpired { slot, token }));
        });

        trace!("Armed {:?} (token {}) for {:?}", slot, token, delay);
        self.pending.insert(slot, PendingTimer { token, handle });
    }

    fn cancel(&mut self, slot: TimerSlot) {
        if let Some(timer) = self.pending.remove(&slot) {
            timer.handle.abort();
            trace!("Cancelled {:?} (token {})", slot, timer.token);
        }
    }

    fn is_pending(&self, slot: TimerSlot) -> bool {
        self.pending.contains_key(&slot)
    }

    fn claim(&mut self, expired: TimerExpired) -> bool {
        match self.pending.get(&expired.slot) {
            Some(timer) if timer.token == expired.token => {
                self.pending.remove(&expired.slot);
                true
            }
            _ => false,
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, timer) in self.pending.drain() {
            timer.handle.abort();
        }
    }
}
