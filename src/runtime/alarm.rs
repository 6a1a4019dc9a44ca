//! Alarm implementations

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::panel::Alarm;

const BELL: &[u8] = b"\x07";

/// Rings the terminal bell on a fixed interval while playing
///
/// Must be driven from inside a tokio runtime.
pub struct BellAlarm {
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl BellAlarm {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            task: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.task.is_some()
    }
}

impl Alarm for BellAlarm {
    fn play_looping(&mut self) {
        if self.task.is_some() {
            return;
        }
        let interval = self.interval;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let mut stderr = std::io::stderr();
                if let Err(e) = stderr.write_all(BELL).and_then(|_| stderr.flush()) {
                    debug!("Failed to ring terminal bell: {}", e);
                }
            }
        }));
        info!("Alarm started");
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("Alarm stopped");
        }
    }
}

impl Drop for BellAlarm {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Alarm used when `alarm.enabled = false`; only logs
#[derive(Debug, Default)]
pub struct SilentAlarm {
    playing: bool,
}

impl SilentAlarm {
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Alarm for SilentAlarm {
    fn play_looping(&mut self) {
        if !self.playing {
            self.playing = true;
            info!("Alarm started (silent)");
        }
    }

    fn stop(&mut self) {
        if self.playing {
            self.playing = false;
            info!("Alarm stopped (silent)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bell_alarm_is_idempotent() {
        let mut alarm = BellAlarm::new(Duration::from_secs(60));
        assert!(!alarm.is_playing());

        alarm.play_looping();
        alarm.play_looping();
        assert!(alarm.is_playing());

        alarm.stop();
        alarm.stop();
        assert!(!alarm.is_playing());
    }

    #[test]
    fn test_silent_alarm_tracks_state() {
        let mut alarm = SilentAlarm::default();
        alarm.stop();
        assert!(!alarm.is_playing());
        alarm.play_looping();
        alarm.play_looping();
        assert!(alarm.is_playing());
        alarm.stop();
        assert!(!alarm.is_playing());
    }
}
