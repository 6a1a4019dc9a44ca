//! Panel timing constants
//!
//! Every duration except the error-injection delay range is fixed.

use std::time::Duration;

/// How long a single-system reboot takes
pub const BOOT_TIME: Duration = Duration::from_secs(5);

/// How long "Reboot All" takes
pub const REBOOT_ALL_TIME: Duration = Duration::from_secs(2);

/// How long "{system} Reboot Complete" stays before returning to idle
pub const COMPLETION_HOLD: Duration = Duration::from_secs(1);

/// How long "All Systems Reboot Complete" stays before returning to idle
pub const REBOOT_ALL_COMPLETION_HOLD: Duration = Duration::from_millis(800);

/// How long the latest history entry stays visible
pub const HISTORY_HOLD: Duration = Duration::from_secs(1);

/// Cursor blink period, owned by the presentation layer
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

pub const DEFAULT_ERROR_DELAY_MIN: Duration = Duration::from_secs(30);
pub const DEFAULT_ERROR_DELAY_MAX: Duration = Duration::from_secs(60);

/// Inclusive range the random error delay is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl ErrorDelayRange {
    /// Builds a range, swapping the bounds if they arrive reversed
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, delay: Duration) -> bool {
        delay >= self.min && delay <= self.max
    }
}

impl Default for ErrorDelayRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_ERROR_DELAY_MIN,
            max: DEFAULT_ERROR_DELAY_MAX,
        }
    }
}

/// Durations the controller schedules against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTiming {
    pub boot_time: Duration,
    pub reboot_all_time: Duration,
    pub completion_hold: Duration,
    pub reboot_all_completion_hold: Duration,
    pub history_hold: Duration,
    pub error_delay: ErrorDelayRange,
}

impl PanelTiming {
    /// Fixed constants with a custom error delay range
    pub fn with_error_delay(error_delay: ErrorDelayRange) -> Self {
        Self {
            error_delay,
            ..Self::default()
        }
    }
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            boot_time: BOOT_TIME,
            reboot_all_time: REBOOT_ALL_TIME,
            completion_hold: COMPLETION_HOLD,
            reboot_all_completion_hold: REBOOT_ALL_COMPLETION_HOLD,
            history_hold: HISTORY_HOLD,
            error_delay: ErrorDelayRange::default(),
        }
    }
}
