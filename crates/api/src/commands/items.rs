//! Item catalog commands

use ballkeeper_domain::{ItemId, ItemSummary, ItemTarget, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Reservable items, in server order.
pub async fn list_items(ctx: &AppContext) -> Result<Vec<ItemSummary>> {
    execute_command("items::list_items", || async move {
        ctx.catalog.list_active_items().await
    })
    .await
}

/// Calendar target for `item_id`, labelled with the catalog name when the item
/// is listed.
pub async fn resolve_item(ctx: &AppContext, item_id: ItemId) -> Result<ItemTarget> {
    execute_command("items::resolve_item", || async move {
        let items = ctx.catalog.list_active_items().await?;
        let target = match items.iter().find(|item| item.id == item_id) {
            Some(item) => item.as_target(),
            None => ItemTarget::new(item_id, format!("Item {item_id}")),
        };
        Ok(target)
    })
    .await
}
