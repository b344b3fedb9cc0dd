//! Assistant chat commands

use ballkeeper_domain::{BallkeeperError, ChatMessage, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Send `text` for the signed-in user and return the assistant's reply, or the
/// system message describing why there is none.
///
/// # Errors
/// `Auth` when nobody is signed in, `InvalidInput` for blank text.
pub async fn send_chat_message(ctx: &AppContext, text: &str) -> Result<ChatMessage> {
    execute_command("chat::send_chat_message", || async move {
        let mut guard = ctx.chat().lock().await;
        let transcript = guard
            .as_mut()
            .ok_or_else(|| BallkeeperError::Auth("sign in to use the assistant".into()))?;
        let reply = transcript.send(text).await?.clone();
        Ok(reply)
    })
    .await
}

/// Every message of the signed-in user's transcript, greeting first.
pub async fn chat_history(ctx: &AppContext) -> Vec<ChatMessage> {
    ctx.chat().lock().await.as_ref().map(|t| t.messages().to_vec()).unwrap_or_default()
}
