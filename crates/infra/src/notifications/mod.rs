//! Server-sent event notification channel

pub mod sse;

pub use sse::{SseDecoder, SseEvent, SseNotificationChannel};
