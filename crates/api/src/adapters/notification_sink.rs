//! Notification sink that writes each delivery to the log.

use ballkeeper_core::NotificationSink;
use ballkeeper_domain::{Notification, UserIdentity};
use tracing::info;

/// Terminal stand-in for the toast shown by graphical hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn deliver(&self, user: &UserIdentity, notification: Notification) {
        info!(
            user_id = user.id,
            received_at = %notification.received_at,
            message = %notification.message,
            "notification"
        );
    }
}
