//! Sign-in state
//!
//! The host owns authentication; these commands only tell the backend layer
//! who is signed in so the chat transcript and the notification subscription
//! follow the user.

use ballkeeper_domain::{Result, UserIdentity};
use tracing::{debug, info};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

pub async fn sign_in(ctx: &AppContext, user: UserIdentity) -> Result<()> {
    execute_command("session::sign_in", || async move {
        info!(user_id = user.id, "Signing in");
        sync(ctx, Some(user)).await
    })
    .await
}

pub async fn sign_out(ctx: &AppContext) -> Result<()> {
    execute_command("session::sign_out", || async move {
        info!("Signing out");
        sync(ctx, None).await
    })
    .await
}

pub fn current_user(ctx: &AppContext) -> Option<UserIdentity> {
    ctx.identity()
}

/// Whether a notification subscription is currently delivering.
pub async fn notifications_connected(ctx: &AppContext) -> bool {
    match &ctx.notifications {
        Some(service) => service.is_connected().await,
        None => false,
    }
}

async fn sync(ctx: &AppContext, identity: Option<UserIdentity>) -> Result<()> {
    if !ctx.set_identity(identity.clone()).await {
        debug!("Identity unchanged");
    }
    match &ctx.notifications {
        Some(service) => service.sync_identity(identity.as_ref()).await,
        None => Ok(()),
    }
}
