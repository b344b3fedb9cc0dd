//! Chat port

use async_trait::async_trait;
use ballkeeper_domain::{Result, UserId};

/// Conversational assistant backend.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send one user message and return the assistant's plain-text reply.
    async fn send_message(&self, user_id: UserId, text: &str) -> Result<String>;
}
