//! Notification session management
//!
//! The channel is a function of the signed-in identity: a user present means
//! exactly one live subscription for that user, no user means none. A
//! transport error ends the subscription and it is not reopened until the
//! identity changes.

use std::sync::Arc;

use ballkeeper_domain::{BallkeeperError, Result, UserIdentity};
use futures::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::ports::{NotificationChannel, NotificationSink, NotificationStream};

/// Why a subscription stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionEnd {
    /// Released by the client.
    Released,
    /// The server closed the stream.
    Closed,
    /// Transport failure; not retried.
    Failed(BallkeeperError),
}

/// One live subscription. Dropping it cancels the pump task.
#[derive(Debug)]
pub struct Subscription {
    user: UserIdentity,
    token: CancellationToken,
    handle: Option<JoinHandle<SubscriptionEnd>>,
}

impl Subscription {
    fn spawn(
        user: UserIdentity,
        stream: NotificationStream,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let token = CancellationToken::new();
        let handle = tokio::spawn(pump(user.clone(), stream, sink, token.clone()));
        Self { user, token, handle: Some(handle) }
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn is_live(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel and wait for the pump to stop.
    pub async fn release(mut self) -> SubscriptionEnd {
        self.token.cancel();
        let Some(handle) = self.handle.take() else {
            return SubscriptionEnd::Released;
        };
        match handle.await {
            Ok(end) => end,
            Err(join_err) => {
                SubscriptionEnd::Failed(BallkeeperError::Internal(join_err.to_string()))
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn pump(
    user: UserIdentity,
    mut stream: NotificationStream,
    sink: Arc<dyn NotificationSink>,
    token: CancellationToken,
) -> SubscriptionEnd {
    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!(user_id = user.id, "Notification subscription released");
                return SubscriptionEnd::Released;
            }
            next = stream.next() => match next {
                Some(Ok(notification)) => sink.deliver(&user, notification),
                Some(Err(err)) => {
                    error!(user_id = user.id, error = %err, "Notification stream failed; not reconnecting");
                    return SubscriptionEnd::Failed(err);
                }
                None => {
                    info!(user_id = user.id, "Notification stream closed by server");
                    return SubscriptionEnd::Closed;
                }
            },
        }
    }
}

/// Keeps the notification subscription in step with the signed-in user.
pub struct NotificationService {
    channel: Arc<dyn NotificationChannel>,
    sink: Arc<dyn NotificationSink>,
    current: Mutex<Option<Subscription>>,
}

impl NotificationService {
    pub fn new(channel: Arc<dyn NotificationChannel>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { channel, sink, current: Mutex::new(None) }
    }

    /// Reconcile the subscription with `identity`.
    ///
    /// Same user: nothing happens. Different user: the old subscription is
    /// released before the new one opens. `None`: released.
    ///
    /// # Errors
    /// Returns the channel error if opening a new subscription fails; the
    /// service is then left without a subscription.
    pub async fn sync_identity(&self, identity: Option<&UserIdentity>) -> Result<()> {
        let mut current = self.current.lock().await;

        if let (Some(existing), Some(user)) = (current.as_ref(), identity) {
            if existing.user.id == user.id {
                return Ok(());
            }
        }

        if let Some(previous) = current.take() {
            let user_id = previous.user.id;
            let end = previous.release().await;
            info!(user_id, ?end, "Notification subscription closed");
        }

        let Some(user) = identity else {
            return Ok(());
        };

        let stream = self.channel.subscribe(user).await?;
        info!(user_id = user.id, "Notification subscription opened");
        *current = Some(Subscription::spawn(user.clone(), stream, Arc::clone(&self.sink)));
        Ok(())
    }

    /// Release any subscription.
    pub async fn shutdown(&self) {
        if let Some(subscription) = self.current.lock().await.take() {
            let user_id = subscription.user.id;
            let end = subscription.release().await;
            info!(user_id, ?end, "Notification subscription closed");
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.current.lock().await.as_ref().is_some_and(Subscription::is_live)
    }

    pub async fn current_user(&self) -> Option<UserIdentity> {
        self.current.lock().await.as_ref().map(|s| s.user.clone())
    }
}
