//! Application context - dependency injection container

use std::sync::Arc;

use ballkeeper_core::{
    AdminGateway, AdminService, CalendarEngine, CalendarSettings, ChatGateway, ChatTranscript,
    ItemCatalog, NotificationChannel, NotificationService, NotificationSink, ReservationSource,
};
use ballkeeper_domain::{Config, Result, UserIdentity};
use ballkeeper_infra::{
    config, AdminApi, ChatApi, HttpClient, ItemsApi, ReservationApi, SseNotificationChannel,
};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::info;

use crate::adapters::LogNotificationSink;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub http: Arc<HttpClient>,
    pub calendar: CalendarEngine,
    pub catalog: Arc<dyn ItemCatalog>,
    pub chat_gateway: Arc<dyn ChatGateway>,
    pub admin: AdminService,
    /// `None` when push notifications are disabled in the configuration.
    pub notifications: Option<NotificationService>,

    identity: RwLock<Option<UserIdentity>>,
    // Async lock: a send holds the transcript across the gateway call.
    chat: Mutex<Option<ChatTranscript>>,
}

impl AppContext {
    /// Load configuration from the environment or config files and wire up
    /// every service.
    pub fn new() -> Result<Self> {
        let config = config::load()?;
        Self::from_config(config)
    }

    /// Wire up every service against the HTTP backend named by `config`,
    /// logging notifications to the tracing output.
    pub fn from_config(config: Config) -> Result<Self> {
        Self::with_sink(config, Arc::new(LogNotificationSink))
    }

    /// Like [`Self::from_config`], delivering notifications to `sink`.
    pub fn with_sink(config: Config, sink: Arc<dyn NotificationSink>) -> Result<Self> {
        config.validate()?;

        let http = Arc::new(HttpClient::from_config(&config.api)?);

        let source: Arc<dyn ReservationSource> = Arc::new(ReservationApi::new(Arc::clone(&http)));
        let calendar = CalendarEngine::new(source, CalendarSettings::from(&config.calendar));

        let catalog: Arc<dyn ItemCatalog> = Arc::new(ItemsApi::new(Arc::clone(&http)));
        let chat_gateway: Arc<dyn ChatGateway> = Arc::new(ChatApi::new(Arc::clone(&http)));
        let admin_gateway: Arc<dyn AdminGateway> = Arc::new(AdminApi::new(Arc::clone(&http)));

        let notifications = if config.notifications.enabled {
            let channel: Arc<dyn NotificationChannel> =
                Arc::new(SseNotificationChannel::new(Arc::clone(&http), &config.notifications));
            Some(NotificationService::new(channel, sink))
        } else {
            None
        };

        info!(
            base_url = %http.base_url(),
            window_margin_days = config.calendar.window_margin_days,
            notifications = config.notifications.enabled,
            "AppContext initialised"
        );

        Ok(Self {
            config,
            http,
            calendar,
            catalog,
            chat_gateway,
            admin: AdminService::new(admin_gateway),
            notifications,
            identity: RwLock::new(None),
            chat: Mutex::new(None),
        })
    }

    /// Signed-in user, if any.
    pub fn identity(&self) -> Option<UserIdentity> {
        self.identity.read().clone()
    }

    /// Replace the signed-in user, returning whether it changed.
    ///
    /// A new user gets a fresh chat transcript. Notification subscriptions are
    /// reconciled by the caller.
    pub(crate) async fn set_identity(&self, identity: Option<UserIdentity>) -> bool {
        {
            let mut current = self.identity.write();
            if *current == identity {
                return false;
            }
            current.clone_from(&identity);
        }

        let transcript = identity
            .map(|user| ChatTranscript::new(Arc::clone(&self.chat_gateway), user));
        *self.chat.lock().await = transcript;
        true
    }

    pub(crate) fn chat(&self) -> &Mutex<Option<ChatTranscript>> {
        &self.chat
    }

    /// Close the calendar and release the notification subscription.
    pub async fn shutdown(&self) {
        info!("shutdown called on AppContext");
        self.calendar.close();
        if let Some(notifications) = &self.notifications {
            notifications.shutdown().await;
        }
    }
}
