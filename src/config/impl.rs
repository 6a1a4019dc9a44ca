use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use super::validators::validate_config;
use crate::errors::PanelError;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to defaults if `init_config` has not been called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Load, validate and install the global configuration
///
/// Loads from `path` (optional file) plus `RT__*` environment overrides.
/// Calling it again replaces the installed configuration.
pub fn init_config(path: &str) -> Result<Arc<StaticConfig>, PanelError> {
    let config = StaticConfig::load(path)?;
    validate_config(&config)?;

    let config = Arc::new(config);
    match CONFIG.get() {
        Some(current) => current.store(config.clone()),
        None => {
            let _ = CONFIG.set(ArcSwap::new(config.clone()));
        }
    }
    Ok(get_config())
}
