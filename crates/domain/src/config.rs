//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS, DEFAULT_FETCH_TIMEOUT_MS,
    DEFAULT_NOTIFICATION_CONNECT_TIMEOUT_MS, DEFAULT_NOTIFICATION_EVENT,
    DEFAULT_RETRY_BASE_BACKOFF_MS, DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_RETRY_MAX_BACKOFF_MS,
    DEFAULT_USER_AGENT, DEFAULT_WINDOW_MARGIN_DAYS,
};
use crate::errors::{BallkeeperError, Result};
use crate::types::Granularity;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub calendar: CalendarConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

/// Reservation backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Total attempts per HTTP request (initial try + transport retries).
    pub max_attempts: usize,
    pub base_backoff_ms: u64,
    pub user_agent: String,
}

/// Availability calendar engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Days fetched on each side of the anchor date.
    pub window_margin_days: u32,
    pub fetch_timeout_ms: u64,
    pub retry_max_attempts: u32,
    pub retry_base_backoff_ms: u64,
    pub retry_max_backoff_ms: u64,
    /// When false, granularity is a pure rendering parameter.
    pub refetch_on_granularity_change: bool,
    pub default_granularity: Granularity,
}

/// Push notification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enabled: bool,
    /// SSE event name carrying notifications.
    pub event_name: String,
    pub connect_timeout_ms: u64,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
            max_attempts: 1,
            base_backoff_ms: 200,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            window_margin_days: DEFAULT_WINDOW_MARGIN_DAYS,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            retry_max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
            retry_base_backoff_ms: DEFAULT_RETRY_BASE_BACKOFF_MS,
            retry_max_backoff_ms: DEFAULT_RETRY_MAX_BACKOFF_MS,
            refetch_on_granularity_change: true,
            default_granularity: Granularity::Week,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            event_name: DEFAULT_NOTIFICATION_EVENT.to_string(),
            connect_timeout_ms: DEFAULT_NOTIFICATION_CONNECT_TIMEOUT_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn base_backoff(&self) -> Duration {
        Duration::from_millis(self.base_backoff_ms)
    }
}

impl CalendarConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn retry_base_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_base_backoff_ms)
    }

    pub fn retry_max_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_max_backoff_ms)
    }
}

impl NotificationConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Config {
    /// Reject settings the engine cannot run with.
    ///
    /// # Errors
    /// Returns `BallkeeperError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(BallkeeperError::Config("api.base_url must not be empty".into()));
        }
        if self.api.max_attempts == 0 {
            return Err(BallkeeperError::Config("api.max_attempts must be at least 1".into()));
        }
        if self.calendar.window_margin_days == 0 {
            return Err(BallkeeperError::Config(
                "calendar.window_margin_days must be at least 1".into(),
            ));
        }
        if self.calendar.retry_max_attempts == 0 {
            return Err(BallkeeperError::Config(
                "calendar.retry_max_attempts must be at least 1".into(),
            ));
        }
        if self.calendar.fetch_timeout_ms == 0 {
            return Err(BallkeeperError::Config("calendar.fetch_timeout_ms must be positive".into()));
        }
        if self.calendar.retry_base_backoff_ms > self.calendar.retry_max_backoff_ms {
            return Err(BallkeeperError::Config(format!(
                "calendar.retry_base_backoff_ms ({}) exceeds retry_max_backoff_ms ({})",
                self.calendar.retry_base_backoff_ms, self.calendar.retry_max_backoff_ms
            )));
        }
        if self.notifications.event_name.trim().is_empty() {
            return Err(BallkeeperError::Config(
                "notifications.event_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
