//! Admin console commands
//!
//! All of them act as the signed-in user; the core service rejects non-admins.

use ballkeeper_domain::{
    BallkeeperError, DashboardMetrics, ReservationSummary, Result, UserAccount, UserId,
    UserIdentity,
};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

pub async fn admin_list_users(ctx: &AppContext) -> Result<Vec<UserAccount>> {
    execute_command("admin::list_users", || async move {
        let admin = signed_in(ctx)?;
        ctx.admin.list_users(&admin).await
    })
    .await
}

pub async fn admin_toggle_role(ctx: &AppContext, target_id: UserId) -> Result<()> {
    execute_command("admin::toggle_role", || async move {
        let admin = signed_in(ctx)?;
        ctx.admin.toggle_admin_role(&admin, target_id).await
    })
    .await
}

pub async fn admin_user_reservations(
    ctx: &AppContext,
    target_id: UserId,
) -> Result<Vec<ReservationSummary>> {
    execute_command("admin::user_reservations", || async move {
        let admin = signed_in(ctx)?;
        ctx.admin.user_reservations(&admin, target_id).await
    })
    .await
}

pub async fn admin_dashboard(ctx: &AppContext) -> Result<DashboardMetrics> {
    execute_command("admin::dashboard", || async move {
        let admin = signed_in(ctx)?;
        ctx.admin.dashboard(&admin).await
    })
    .await
}

fn signed_in(ctx: &AppContext) -> Result<UserIdentity> {
    ctx.identity().ok_or_else(|| BallkeeperError::Auth("not signed in".into()))
}
