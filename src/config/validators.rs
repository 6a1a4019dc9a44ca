//! Configuration validation

use super::StaticConfig;
use crate::errors::PanelError;

/// Log formats `init_logging` understands
pub const LOG_FORMATS: &[&str] = &["text", "json"];

/// Checks values serde cannot reject on its own
pub fn validate_config(config: &StaticConfig) -> Result<(), PanelError> {
    let panel = &config.panel;
    if panel.error_delay_min_secs == 0 {
        return Err(PanelError::validation(
            "panel.error_delay_min_secs must be greater than 0",
        ));
    }
    if panel.error_delay_min_secs > panel.error_delay_max_secs {
        return Err(PanelError::validation(format!(
            "panel.error_delay_min_secs ({}) must not exceed panel.error_delay_max_secs ({})",
            panel.error_delay_min_secs, panel.error_delay_max_secs
        )));
    }

    if config.alarm.bell_interval_ms == 0 {
        return Err(PanelError::validation(
            "alarm.bell_interval_ms must be greater than 0",
        ));
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(PanelError::validation(format!(
            "Invalid logging.format: '{}'. Valid: {}",
            config.logging.format,
            LOG_FORMATS.join(", ")
        )));
    }

    Ok(())
}
