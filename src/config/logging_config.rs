use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warn => f.write_str("warn"),
            Self::Info => f.write_str("info"),
            Self::Debug => f.write_str("debug"),
            Self::Trace => f.write_str("trace"),
        }
    }
}

/// Size threshold and retained-backup count shared by the file handlers.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    #[serde(default = "crate::config::defaults::default_log_max_bytes")]
    pub max_bytes: u64,
    #[serde(default = "crate::config::defaults::default_log_backup_count")]
    pub backup_count: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_bytes: crate::config::defaults::default_log_max_bytes(),
            backup_count: crate::config::defaults::default_log_backup_count(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ConsoleHandler {
    pub level: LogLevel,
}

/// Rotating-file handler descriptor handed to the logging setup fully
/// resolved, so it does not need to know about the two-file convention.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FileHandler {
    pub filename: String,
    pub level: LogLevel,
    pub max_bytes: u64,
    pub backup_count: u32,
}

impl Default for FileHandler {
    fn default() -> Self {
        Self {
            filename: String::new(),
            level: LogLevel::Info,
            max_bytes: crate::config::defaults::default_log_max_bytes(),
            backup_count: crate::config::defaults::default_log_backup_count(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogHandlers {
    pub console: ConsoleHandler,
    pub info_file: FileHandler,
    pub error_file: FileHandler,
}

impl Default for LogHandlers {
    fn default() -> Self {
        Self {
            console: ConsoleHandler::default(),
            info_file: FileHandler {
                filename: crate::config::defaults::default_info_log_file(),
                level: LogLevel::Info,
                ..Default::default()
            },
            error_file: FileHandler {
                filename: crate::config::defaults::default_error_log_file(),
                level: LogLevel::Error,
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "crate::config::defaults::default_info_log_file")]
    pub info_file: String,
    #[serde(default = "crate::config::defaults::default_error_log_file")]
    pub error_file: String,
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub handlers: LogHandlers,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            info_file: crate::config::defaults::default_info_log_file(),
            error_file: crate::config::defaults::default_error_log_file(),
            rotation: RotationConfig::default(),
            handlers: LogHandlers::default(),
        }
    }
}

impl LoggingConfig {
    /// Push the rotation policy and the configured file paths into the
    /// handler descriptors. Runs exactly once, at the end of resolution.
    /// A non-empty path replaces the descriptor filename outright; an empty
    /// one leaves the descriptor's default filename in place.
    pub(crate) fn finalize(&mut self) {
        self.handlers.info_file.max_bytes = self.rotation.max_bytes;
        self.handlers.info_file.backup_count = self.rotation.backup_count;
        self.handlers.error_file.max_bytes = self.rotation.max_bytes;
        self.handlers.error_file.backup_count = self.rotation.backup_count;

        if !self.info_file.is_empty() {
            self.handlers.info_file.filename = self.info_file.clone();
        }
        if !self.error_file.is_empty() {
            self.handlers.error_file.filename = self.error_file.clone();
        }
    }
}
