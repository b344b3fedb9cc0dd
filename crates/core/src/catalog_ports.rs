//! Item catalog port

use async_trait::async_trait;
use ballkeeper_domain::{ItemSummary, Result};

/// Listing of reservable items.
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    async fn list_active_items(&self) -> Result<Vec<ItemSummary>>;
}
