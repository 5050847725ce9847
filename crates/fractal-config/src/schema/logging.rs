//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive covering every workspace crate.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "fractal=trace",
            LogLevel::Debug => "fractal=debug",
            LogLevel::Info => "fractal=info",
            LogLevel::Warn => "fractal=warn",
            LogLevel::Error => "fractal=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Seconds between FPS reports at debug level; 0 disables them.
    pub fps_interval_secs: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            fps_interval_secs: 5,
        }
    }
}
