//! Item catalog types

use serde::{Deserialize, Serialize};

use super::calendar::{ItemId, ItemTarget};

/// Reservable item as listed by `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemSummary {
    /// Calendar target for this item, labelled with its name.
    pub fn as_target(&self) -> ItemTarget {
        ItemTarget::new(self.id, self.name.clone())
    }
}
