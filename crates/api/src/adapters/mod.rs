//! Host-side implementations of core ports that have no network component.

pub mod notification_sink;

pub use notification_sink::LogNotificationSink;
