use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::PanelError;
use crate::panel::{ErrorDelayRange, PanelTiming};

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "RT";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - panel: 随机故障间隔
/// - alarm: 报警铃声
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub alarm: AlarmConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config file > 默认值
    /// ENV 前缀：RT，分隔符：__
    /// 示例：RT__PANEL__ERROR_DELAY_MIN_SECS=5
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: &str) -> Result<Self, PanelError> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    ///
    /// 文件系统错误归为配置错误，而不是终端错误
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), PanelError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                PanelError::config(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        std::fs::write(path, content).map_err(|e| {
            PanelError::config(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

/// 面板配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_error_delay_min_secs")]
    pub error_delay_min_secs: u64,
    #[serde(default = "default_error_delay_max_secs")]
    pub error_delay_max_secs: u64,
}

impl PanelConfig {
    pub fn error_delay(&self) -> ErrorDelayRange {
        ErrorDelayRange::new(
            Duration::from_secs(self.error_delay_min_secs),
            Duration::from_secs(self.error_delay_max_secs),
        )
    }

    pub fn timing(&self) -> PanelTiming {
        PanelTiming::with_error_delay(self.error_delay())
    }
}

/// 报警配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    #[serde(default = "default_alarm_enabled")]
    pub enabled: bool,
    #[serde(default = "default_bell_interval_ms")]
    pub bell_interval_ms: u64,
}

impl AlarmConfig {
    pub fn bell_interval(&self) -> Duration {
        Duration::from_millis(self.bell_interval_ms)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_error_delay_min_secs() -> u64 {
    30
}

fn default_error_delay_max_secs() -> u64 {
    60
}

fn default_alarm_enabled() -> bool {
    true
}

fn default_bell_interval_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    Some("reboot-terminal.log".to_string())
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

// ============================================================
// Default implementations
// ============================================================

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            error_delay_min_secs: default_error_delay_min_secs(),
            error_delay_max_secs: default_error_delay_max_secs(),
        }
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            enabled: default_alarm_enabled(),
            bell_interval_ms: default_bell_interval_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
