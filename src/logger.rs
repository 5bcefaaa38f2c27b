//! Structured logging module
//!
//! Centralized logging for the client core:
//! - Log levels (ERROR, WARN, INFO, DEBUG, TRACE)
//! - JSON lines in production, human-readable lines in development
//! - Daily log files with size-based rotation
//! - Redaction of tokens and credentials before anything hits disk

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Log levels following RFC 5424
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "TRACE" => LogLevel::Trace,
            "DEBUG" => LogLevel::Debug,
            "INFO" => LogLevel::Info,
            "WARN" => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// Structured log entry
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub target: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub log_to_file: bool,
    pub log_to_stdout: bool,
    pub json_format: bool,
    pub max_file_size_mb: u64,
    pub max_log_files: u32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let cfg = crate::config::get_config();
        Self {
            level: LogLevel::parse(&cfg.logging.level),
            log_to_file: cfg.logging.log_to_file,
            log_to_stdout: cfg.logging.log_to_stdout,
            json_format: cfg.logging.json_format,
            max_file_size_mb: cfg.logging.max_file_size_mb,
            max_log_files: cfg.logging.max_log_files,
        }
    }
}

struct ActiveFile {
    writer: BufWriter<File>,
    written: u64,
}

/// Main logger instance
pub struct Logger {
    config: LoggerConfig,
    log_dir: PathBuf,
    file: Mutex<Option<ActiveFile>>,
}

impl Logger {
    /// Initialize the logger under the configured log directory
    pub fn init(app_data_dir: &Path, config: LoggerConfig) -> Result<Self, String> {
        let log_dir = crate::config::get_config().get_log_dir(app_data_dir);
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;

        let logger = Self {
            config,
            log_dir,
            file: Mutex::new(None),
        };

        logger.open_current_file()?;
        Ok(logger)
    }

    fn current_file_path(&self) -> PathBuf {
        let date = Local::now().format("%Y-%m-%d");
        self.log_dir.join(format!("client-{}.log", date))
    }

    fn rotated_path(&self, index: u32) -> PathBuf {
        let date = Local::now().format("%Y-%m-%d");
        self.log_dir.join(format!("client-{}.{}.log", date, index))
    }

    /// Open today's file, rotating first if it outgrew the limit
    fn open_current_file(&self) -> Result<(), String> {
        let path = self.current_file_path();
        let max_bytes = self.config.max_file_size_mb * 1024 * 1024;

        if let Ok(meta) = std::fs::metadata(&path) {
            if meta.len() >= max_bytes {
                // Shift client-YYYY-MM-DD.N.log up by one, dropping the oldest
                let _ = std::fs::remove_file(self.rotated_path(self.config.max_log_files));
                for i in (1..self.config.max_log_files).rev() {
                    let from = self.rotated_path(i);
                    if from.exists() {
                        let _ = std::fs::rename(&from, self.rotated_path(i + 1));
                    }
                }
                let _ = std::fs::rename(&path, self.rotated_path(1));
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        if let Ok(mut guard) = self.file.lock() {
            *guard = Some(ActiveFile {
                writer: BufWriter::new(file),
                written,
            });
        }

        Ok(())
    }

    fn write(&self, entry: &LogEntry) {
        if entry.level > self.config.level {
            return;
        }

        let line = if self.config.json_format {
            serde_json::to_string(entry).unwrap_or_else(|_| "{}".to_string())
        } else {
            format!(
                "{} [{}] [{}] {}{}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                entry.level.as_str(),
                entry.target,
                entry.message,
                entry
                    .data
                    .as_ref()
                    .map(|d| format!(" | {}", d))
                    .unwrap_or_default()
            )
        };

        if self.config.log_to_stdout {
            match entry.level {
                LogLevel::Error | LogLevel::Warn => eprintln!("{}", line),
                _ => println!("{}", line),
            }
        }

        if self.config.log_to_file {
            let max_bytes = self.config.max_file_size_mb * 1024 * 1024;
            let mut needs_rotation = false;

            if let Ok(mut guard) = self.file.lock() {
                if let Some(active) = guard.as_mut() {
                    let _ = writeln!(active.writer, "{}", line);
                    let _ = active.writer.flush();
                    active.written += line.len() as u64 + 1;
                    needs_rotation = active.written >= max_bytes;
                }
            }

            if needs_rotation {
                let _ = self.open_current_file();
            }
        }
    }

    pub fn error(&self, target: &'static str, message: &str, error: Option<&str>) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Error,
            target,
            message: message.to_string(),
            data: None,
            error: error.map(String::from),
        });
    }

    pub fn warn(&self, target: &'static str, message: &str) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Warn,
            target,
            message: message.to_string(),
            data: None,
            error: None,
        });
    }

    pub fn info(&self, target: &'static str, message: &str, data: Option<serde_json::Value>) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Info,
            target,
            message: message.to_string(),
            data: data.map(redact_sensitive),
            error: None,
        });
    }

    pub fn debug(&self, target: &'static str, message: &str, data: Option<serde_json::Value>) {
        self.write(&LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Debug,
            target,
            message: message.to_string(),
            data: data.map(redact_sensitive),
            error: None,
        });
    }
}

/// Redact credential-looking fields from structured log data.
/// The session token must never appear in a log file.
pub fn redact_sensitive(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map) => {
            for (key, val) in map.iter_mut() {
                let k = key.to_lowercase();
                if k.contains("token")
                    || k.contains("password")
                    || k.contains("secret")
                    || k.contains("authorization")
                {
                    *val = serde_json::Value::String("***REDACTED***".to_string());
                } else {
                    *val = redact_sensitive(val.clone());
                }
            }
            serde_json::Value::Object(map)
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(redact_sensitive).collect())
        }
        _ => value,
    }
}

/// Global logger instance
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize the global logger
pub fn init_global_logger(app_data_dir: &Path) -> Result<(), String> {
    let logger = Logger::init(app_data_dir, LoggerConfig::default())?;

    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| "Logger already initialized".to_string())?;

    Ok(())
}

/// Get the global logger instance
pub fn get_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_error {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.error($target, $msg, None);
        }
    };
    ($target:expr, $msg:expr, $err:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.error($target, $msg, Some(&$err));
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.warn($target, $msg);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.info($target, $msg, None);
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.info($target, $msg, ::std::option::Option::Some($data));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($target:expr, $msg:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.debug($target, $msg, None);
        }
    };
    ($target:expr, $msg:expr, $data:expr) => {
        if let Some(l) = $crate::logger::get_logger() {
            l.debug($target, $msg, ::std::option::Option::Some($data));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_token_fields_recursively() {
        let data = serde_json::json!({
            "access_token": "abc",
            "nested": { "password": "x", "country": "KE" },
            "items": [{ "authorization": "Bearer abc" }]
        });
        let redacted = redact_sensitive(data);
        assert_eq!(redacted["access_token"], "***REDACTED***");
        assert_eq!(redacted["nested"]["password"], "***REDACTED***");
        assert_eq!(redacted["nested"]["country"], "KE");
        assert_eq!(redacted["items"][0]["authorization"], "***REDACTED***");
    }
}
