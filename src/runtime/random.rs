use std::time::Duration;

use crate::panel::{Randomness, System};

/// Randomness backed by the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomness;

impl Randomness for ThreadRandomness {
    fn error_delay(&mut self, min: Duration, max: Duration) -> Duration {
        let min_ms = min.as_millis() as u64;
        let max_ms = max.as_millis() as u64;
        if min_ms >= max_ms {
            return min;
        }
        Duration::from_millis(rand::random_range(min_ms..=max_ms))
    }

    fn pick_system(&mut self) -> System {
        let index = rand::random_range(0..System::COUNT);
        System::from_index(index).unwrap_or(System::AudioDevices)
    }
}
