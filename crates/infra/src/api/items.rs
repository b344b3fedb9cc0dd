//! Item catalog endpoint

use std::sync::Arc;

use async_trait::async_trait;
use ballkeeper_core::ItemCatalog;
use ballkeeper_domain::{ItemSummary, Result};
use tracing::instrument;

use crate::http::HttpClient;

/// `GET /api/items`
pub struct ItemsApi {
    http: Arc<HttpClient>,
}

impl ItemsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ItemCatalog for ItemsApi {
    #[instrument(skip(self))]
    async fn list_active_items(&self) -> Result<Vec<ItemSummary>> {
        self.http.get_json("/api/items", &()).await
    }
}
