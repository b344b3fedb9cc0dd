//! `text/event-stream` decoding and the notification subscription endpoint.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ballkeeper_core::notifications::{NotificationChannel, NotificationStream};
use ballkeeper_domain::{
    BallkeeperError, Notification, NotificationConfig, Result, UserIdentity,
};
use chrono::Utc;
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::Method;
use tracing::{instrument, trace};

use crate::errors::InfraError;
use crate::http::HttpClient;

const SUBSCRIBE_PATH: &str = "/api/notifications/subscribe";
const DEFAULT_EVENT: &str = "message";

/// One dispatched server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event: String,
    pub data: String,
}

/// Incremental SSE parser. Feed it raw body chunks in arrival order.
///
/// Handles `\n` and `\r\n` line endings, comments, multi-line `data` and
/// chunk boundaries anywhere (including inside a UTF-8 sequence).
#[derive(Debug, Default)]
pub struct SseDecoder {
    pending: Vec<u8>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.pending.extend_from_slice(chunk);
        let mut events = Vec::new();

        while let Some(newline) = self.pending.iter().position(|b| *b == b'\n') {
            let mut line: Vec<u8> = self.pending.drain(..=newline).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if let Some(event) = self.process_line(&String::from_utf8_lossy(&line)) {
                events.push(event);
            }
        }
        events
    }

    fn process_line(&mut self, line: &str) -> Option<SseEvent> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => self.data.push(value.to_string()),
            _ => {}
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        let event = self.event.take();
        if self.data.is_empty() {
            return None;
        }
        let data = std::mem::take(&mut self.data).join("\n");
        Some(SseEvent { event: event.unwrap_or_else(|| DEFAULT_EVENT.to_string()), data })
    }
}

/// `GET /api/notifications/subscribe?userId=` as a notification stream.
pub struct SseNotificationChannel {
    http: Arc<HttpClient>,
    event_name: String,
    connect_timeout: Duration,
}

impl SseNotificationChannel {
    pub fn new(http: Arc<HttpClient>, config: &NotificationConfig) -> Self {
        Self {
            http,
            event_name: config.event_name.clone(),
            connect_timeout: config.connect_timeout(),
        }
    }
}

#[async_trait]
impl NotificationChannel for SseNotificationChannel {
    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn subscribe(&self, user: &UserIdentity) -> Result<NotificationStream> {
        let url = self.http.url(SUBSCRIBE_PATH)?;
        let request = self
            .http
            .streaming_request(Method::GET, url)
            .query(&[("userId", user.id)])
            .header(ACCEPT, "text/event-stream");

        let response = tokio::time::timeout(self.connect_timeout, request.send())
            .await
            .map_err(|_| {
                BallkeeperError::Timeout(format!(
                    "notification subscribe exceeded {}ms",
                    self.connect_timeout.as_millis()
                ))
            })?
            .map_err(|err| BallkeeperError::from(InfraError::from(err)))?;
        let response = HttpClient::ensure_success(response).await?;

        let body = response.bytes_stream().map(|chunk| chunk.map(|bytes| bytes.to_vec())).boxed();
        Ok(notification_stream(body, self.event_name.clone()))
    }
}

struct StreamState {
    body: BoxStream<'static, reqwest::Result<Vec<u8>>>,
    decoder: SseDecoder,
    ready: VecDeque<Notification>,
    event_name: String,
    failed: bool,
}

fn notification_stream(
    body: BoxStream<'static, reqwest::Result<Vec<u8>>>,
    event_name: String,
) -> NotificationStream {
    let state = StreamState {
        body,
        decoder: SseDecoder::new(),
        ready: VecDeque::new(),
        event_name,
        failed: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(notification) = state.ready.pop_front() {
                return Some((Ok(notification), state));
            }
            if state.failed {
                return None;
            }
            match state.body.next().await {
                Some(Ok(chunk)) => {
                    for event in state.decoder.push(&chunk) {
                        if event.event == state.event_name {
                            state.ready.push_back(Notification::new(event.data, Utc::now()));
                        } else {
                            trace!(event = %event.event, "Ignoring server-sent event");
                        }
                    }
                }
                Some(Err(err)) => {
                    state.failed = true;
                    return Some((Err(InfraError::from(err).into()), state));
                }
                None => return None,
            }
        }
    })
    .boxed()
}
