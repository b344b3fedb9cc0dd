//! Admin port

use async_trait::async_trait;
use ballkeeper_domain::{DashboardMetrics, ReservationSummary, Result, UserAccount, UserId};

/// Admin endpoints. Every call is authorised by the acting admin's id.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    async fn list_users(&self, admin_id: UserId) -> Result<Vec<UserAccount>>;

    async fn toggle_admin_role(&self, admin_id: UserId, target_id: UserId) -> Result<()>;

    async fn user_reservations(
        &self,
        admin_id: UserId,
        target_id: UserId,
    ) -> Result<Vec<ReservationSummary>>;

    async fn dashboard(&self, admin_id: UserId) -> Result<DashboardMetrics>;
}
