//! Push notification payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text notification pushed by the server to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Self { message: message.into(), received_at }
    }
}
