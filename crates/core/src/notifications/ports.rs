//! Notification port interfaces

use async_trait::async_trait;
use ballkeeper_domain::{Notification, Result, UserIdentity};
use futures::stream::BoxStream;

/// Stream of notifications for one subscription. A `Some(Err(_))` item is a
/// transport failure and ends the subscription.
pub type NotificationStream = BoxStream<'static, Result<Notification>>;

/// Long-lived server push channel keyed by user identity.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn subscribe(&self, user: &UserIdentity) -> Result<NotificationStream>;
}

/// Destination of delivered notifications (toast, log line, ...).
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, user: &UserIdentity, notification: Notification);
}
