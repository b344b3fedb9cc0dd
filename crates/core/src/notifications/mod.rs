//! Identity-scoped push notifications

pub mod ports;
pub mod service;

pub use ports::{NotificationChannel, NotificationSink, NotificationStream};
pub use service::{NotificationService, Subscription, SubscriptionEnd};
