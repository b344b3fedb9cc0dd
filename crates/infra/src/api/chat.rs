//! Assistant chat endpoint

use std::sync::Arc;

use async_trait::async_trait;
use ballkeeper_core::ChatGateway;
use ballkeeper_domain::{BallkeeperError, ChatRequest, Result, UserId};
use reqwest::Method;
use tracing::instrument;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// `POST /api/chat` with `{ "userId", "message" }`, plain-text reply.
///
/// Never retried: a repeated message could be acted upon twice.
pub struct ChatApi {
    http: Arc<HttpClient>,
}

impl ChatApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatGateway for ChatApi {
    #[instrument(skip(self, text))]
    async fn send_message(&self, user_id: UserId, text: &str) -> Result<String> {
        let body = ChatRequest { user_id, message: text.to_string() };
        let url = self.http.url("/api/chat")?;
        let response = self.http.send_once(self.http.request(Method::POST, url).json(&body)).await?;
        let response = HttpClient::ensure_success(response).await?;
        let raw = response.text().await.map_err(|err| BallkeeperError::from(InfraError::from(err)))?;
        Ok(reply_text(raw))
    }
}

/// The backend answers with bare text, but some deployments wrap it as a JSON
/// string.
fn reply_text(raw: String) -> String {
    match serde_json::from_str::<String>(&raw) {
        Ok(unwrapped) => unwrapped,
        Err(_) => raw,
    }
}
