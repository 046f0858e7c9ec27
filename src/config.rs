//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_JUDGE_BASE_URL, DEFAULT_JUDGE_TIMEOUT_SECONDS, DEFAULT_MAX_SESSIONS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub judge: JudgeConfig,
    pub sessions: SessionConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// External judge service configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Origin the judge endpoints are resolved against
    pub base_url: String,
    /// Per-request timeout in seconds; 0 means requests never time out
    pub timeout_seconds: u64,
}

/// Editor session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub max_sessions: usize,
    /// Seconds a session may go untouched before eviction; 0 keeps sessions
    /// until they are closed
    pub idle_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            sessions: SessionConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var("JUDGE_BASE_URL").unwrap_or_else(|_| DEFAULT_JUDGE_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("JUDGE_BASE_URL".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds: env::var("JUDGE_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_TIMEOUT_SECONDS".to_string()))?,
        })
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_sessions: usize = env::var("MAX_SESSIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_SESSIONS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("MAX_SESSIONS".to_string()))?;
        if max_sessions == 0 {
            return Err(ConfigError::InvalidValue("MAX_SESSIONS".to_string()));
        }

        Ok(Self {
            max_sessions,
            idle_timeout_seconds: env::var("SESSION_IDLE_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SESSION_IDLE_TIMEOUT_SECONDS".to_string()))?,
        })
    }

    /// Idle timeout, if eviction is enabled
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_seconds > 0).then(|| Duration::from_secs(self.idle_timeout_seconds))
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
