//! Chat transcript

use std::sync::Arc;

use ballkeeper_domain::{BallkeeperError, ChatMessage, ChatSender, Result, UserIdentity};
use tracing::{debug, warn};

use super::ports::ChatGateway;

/// Ordered conversation between one user and the assistant.
pub struct ChatTranscript {
    gateway: Arc<dyn ChatGateway>,
    user: UserIdentity,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatTranscript {
    /// New transcript seeded with a greeting for `user`.
    pub fn new(gateway: Arc<dyn ChatGateway>, user: UserIdentity) -> Self {
        let greeting = format!(
            "Hello, {}! How can I help you?\n\nTry \"check my reservations\", \
             \"cancel a reservation\" or \"reserve the Nike ball tomorrow at 2pm\".",
            user.name
        );
        let mut transcript = Self { gateway, user, messages: Vec::new(), next_id: 1 };
        transcript.push(ChatSender::Assistant, greeting);
        transcript
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send `text` and append the reply.
    ///
    /// Gateway failures do not fail the call: they are appended as a system
    /// message, which is returned.
    ///
    /// # Errors
    /// `InvalidInput` for blank input; nothing is appended in that case.
    pub async fn send(&mut self, text: &str) -> Result<&ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(BallkeeperError::InvalidInput("message must not be blank".into()));
        }

        self.push(ChatSender::User, text.to_string());
        debug!(user_id = self.user.id, "Sending chat message");

        match self.gateway.send_message(self.user.id, trimmed).await {
            Ok(reply) => self.push(ChatSender::Assistant, reply),
            Err(err) => {
                warn!(user_id = self.user.id, error = %err, "Chat request failed");
                self.push(ChatSender::System, format!("An error occurred: {err}"));
            }
        }
        self.messages
            .last()
            .ok_or_else(|| BallkeeperError::Internal("transcript unexpectedly empty".into()))
    }

    fn push(&mut self, sender: ChatSender, text: String) {
        self.messages.push(ChatMessage { id: self.next_id, sender, text });
        self.next_id += 1;
    }
}
