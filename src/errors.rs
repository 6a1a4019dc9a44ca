use std::fmt;

#[derive(Debug, Clone)]
pub enum PanelError {
    Terminal(String),
    Config(String),
    Validation(String),
    Logging(String),
    Runtime(String),
}

impl PanelError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            PanelError::Terminal(_) => "E001",
            PanelError::Config(_) => "E002",
            PanelError::Validation(_) => "E003",
            PanelError::Logging(_) => "E004",
            PanelError::Runtime(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            PanelError::Terminal(_) => "Terminal Error",
            PanelError::Config(_) => "Configuration Error",
            PanelError::Validation(_) => "Validation Error",
            PanelError::Logging(_) => "Logging Error",
            PanelError::Runtime(_) => "Runtime Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            PanelError::Terminal(msg) => msg,
            PanelError::Config(msg) => msg,
            PanelError::Validation(msg) => msg,
            PanelError::Logging(msg) => msg,
            PanelError::Runtime(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端启动失败时）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PanelError {}

// 便捷的构造函数
impl PanelError {
    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        PanelError::Terminal(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        PanelError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        PanelError::Validation(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        PanelError::Logging(msg.into())
    }

    pub fn runtime<T: Into<String>>(msg: T) -> Self {
        PanelError::Runtime(msg.into())
    }
}

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::Terminal(err.to_string())
    }
}

impl From<config::ConfigError> for PanelError {
    fn from(err: config::ConfigError) -> Self {
        PanelError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PanelError {
    fn from(err: toml::ser::Error) -> Self {
        PanelError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
