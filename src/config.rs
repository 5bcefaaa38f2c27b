//! Environment-based configuration module
//!
//! Configuration for the BossUp client core:
//! - Development: local backend, verbose logging
//! - Production: hosted backend, minimal logging
//!
//! Configuration can be set via:
//! 1. Environment variables (highest priority)
//! 2. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Get environment from APP_ENV variable or default to Development
    pub fn from_env() -> Self {
        match env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()).as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Environment mode
    pub environment: Environment,

    /// Application name
    pub app_name: String,

    /// Application version
    pub version: String,

    /// Remote API configuration
    pub api: ApiConfig,

    /// Session persistence configuration
    pub session: SessionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the BossUp backend; all request paths are relative to it
    pub base_url: String,

    /// Overall request timeout in seconds
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session record file name (relative to app data dir)
    pub file_name: String,

    /// Encryption key file name (relative to app data dir)
    pub key_file_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,

    /// Log to file
    pub log_to_file: bool,

    /// Log to stdout
    pub log_to_stdout: bool,

    /// Use JSON format (true for production)
    pub json_format: bool,

    /// Maximum log file size in MB
    pub max_file_size_mb: u64,

    /// Maximum number of log files to keep
    pub max_log_files: u32,
}

const DEV_API_BASE_URL: &str = "http://127.0.0.1:8000";
const PROD_API_BASE_URL: &str = "https://api.bossup.app";

impl Default for AppConfig {
    fn default() -> Self {
        let env_mode = Environment::from_env();

        Self {
            environment: env_mode,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "BossUp".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),

            api: ApiConfig {
                base_url: env::var("API_BASE_URL").unwrap_or_else(|_| {
                    if env_mode.is_production() {
                        PROD_API_BASE_URL.to_string()
                    } else {
                        DEV_API_BASE_URL.to_string()
                    }
                }),
                timeout_secs: env::var("API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
                connect_timeout_secs: env::var("API_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },

            session: SessionConfig {
                file_name: env::var("SESSION_FILE").unwrap_or_else(|_| "session.json".to_string()),
                key_file_name: "session.key".to_string(),
            },

            logging: LoggingConfig {
                level: env::var("RUST_LOG").unwrap_or_else(|_| {
                    if env_mode.is_production() { "warn".to_string() } else { "debug".to_string() }
                }),
                log_to_file: true,
                log_to_stdout: env::var("LOG_TO_STDOUT")
                    .map(|s| s == "true")
                    .unwrap_or(true),
                json_format: env_mode.is_production(),
                max_file_size_mb: 10,
                max_log_files: 5,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and defaults
    pub fn load() -> Self {
        Self::default()
    }

    /// Get the log directory path
    pub fn get_log_dir(&self, app_data_dir: &Path) -> PathBuf {
        app_data_dir.join("logs")
    }

    /// Get the session record path
    pub fn get_session_path(&self, app_data_dir: &Path) -> PathBuf {
        app_data_dir.join(&self.session.file_name)
    }

    /// Get the encryption key file path
    pub fn get_key_file_path(&self, app_data_dir: &Path) -> PathBuf {
        app_data_dir.join(&self.session.key_file_name)
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    /// Validate configuration for production
    pub fn validate(&self) -> Result<(), String> {
        if self.is_production() {
            if !self.api.base_url.starts_with("https://") {
                return Err("API_BASE_URL must use https in production.".to_string());
            }

            if self.api.base_url.contains("127.0.0.1") || self.api.base_url.contains("localhost") {
                return Err("API_BASE_URL points to a local backend in production.".to_string());
            }
        }

        Ok(())
    }
}

/// Global configuration instance
static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration
pub fn init_config() -> &'static AppConfig {
    GLOBAL_CONFIG.get_or_init(AppConfig::load)
}

/// Get the global configuration
pub fn get_config() -> &'static AppConfig {
    GLOBAL_CONFIG.get_or_init(AppConfig::load)
}
