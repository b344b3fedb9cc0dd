//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

// Calendar window defaults
pub const DEFAULT_WINDOW_MARGIN_DAYS: u32 = 30;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_BASE_BACKOFF_MS: u64 = 250;
pub const DEFAULT_RETRY_MAX_BACKOFF_MS: u64 = 4_000;

/// Wire format for window bounds: ISO-8601 without fractional seconds or zone.
pub const WINDOW_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Remote API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_USER_AGENT: &str = "ballkeeper/0.1";

// Notification channel
pub const DEFAULT_NOTIFICATION_EVENT: &str = "notification";
pub const DEFAULT_NOTIFICATION_CONNECT_TIMEOUT_MS: u64 = 10_000;

// Event titles derived from reservation status
pub const TITLE_PENDING: &str = "Awaiting approval";
pub const TITLE_RESERVED: &str = "Reserved";
