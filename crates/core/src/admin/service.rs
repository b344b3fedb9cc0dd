//! Admin use cases

use std::sync::Arc;

use ballkeeper_domain::{
    BallkeeperError, DashboardMetrics, ReservationSummary, Result, UserAccount, UserId,
    UserIdentity,
};
use tracing::info;

use super::ports::AdminGateway;

/// Admin operations performed on behalf of a signed-in admin.
pub struct AdminService {
    gateway: Arc<dyn AdminGateway>,
}

impl AdminService {
    pub fn new(gateway: Arc<dyn AdminGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list_users(&self, admin: &UserIdentity) -> Result<Vec<UserAccount>> {
        Self::require_admin(admin)?;
        self.gateway.list_users(admin.id).await
    }

    /// Flip `target_id`'s admin flag. Admins cannot demote themselves.
    pub async fn toggle_admin_role(&self, admin: &UserIdentity, target_id: UserId) -> Result<()> {
        Self::require_admin(admin)?;
        if admin.id == target_id {
            return Err(BallkeeperError::InvalidInput(
                "an admin cannot change their own role".into(),
            ));
        }
        self.gateway.toggle_admin_role(admin.id, target_id).await?;
        info!(admin_id = admin.id, target_id, "Admin role toggled");
        Ok(())
    }

    pub async fn user_reservations(
        &self,
        admin: &UserIdentity,
        target_id: UserId,
    ) -> Result<Vec<ReservationSummary>> {
        Self::require_admin(admin)?;
        self.gateway.user_reservations(admin.id, target_id).await
    }

    pub async fn dashboard(&self, admin: &UserIdentity) -> Result<DashboardMetrics> {
        Self::require_admin(admin)?;
        self.gateway.dashboard(admin.id).await
    }

    fn require_admin(user: &UserIdentity) -> Result<()> {
        if user.is_admin {
            Ok(())
        } else {
            Err(BallkeeperError::Auth(format!("user {} is not an admin", user.id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingGateway {
        toggles: Mutex<Vec<(UserId, UserId)>>,
    }

    #[async_trait]
    impl AdminGateway for RecordingGateway {
        async fn list_users(&self, _admin_id: UserId) -> Result<Vec<UserAccount>> {
            Ok(vec![UserAccount {
                id: 2,
                name: "Bob".into(),
                email: "bob@example.com".into(),
                admin: false,
            }])
        }

        async fn toggle_admin_role(&self, admin_id: UserId, target_id: UserId) -> Result<()> {
            self.toggles.lock().unwrap().push((admin_id, target_id));
            Ok(())
        }

        async fn user_reservations(
            &self,
            _admin_id: UserId,
            _target_id: UserId,
        ) -> Result<Vec<ReservationSummary>> {
            Ok(Vec::new())
        }

        async fn dashboard(&self, _admin_id: UserId) -> Result<DashboardMetrics> {
            Ok(DashboardMetrics {
                pending_reservation_count: 1,
                active_item_count: 4,
                total_user_count: 9,
                daily_stats: Vec::new(),
                popular_items: Vec::new(),
            })
        }
    }

    fn identity(id: UserId, is_admin: bool) -> UserIdentity {
        UserIdentity { id, name: format!("u{id}"), is_admin }
    }

    #[tokio::test]
    async fn self_toggle_is_rejected_before_reaching_gateway() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = AdminService::new(gateway.clone());
        let err = service.toggle_admin_role(&identity(1, true), 1).await.unwrap_err();
        assert!(matches!(err, BallkeeperError::InvalidInput(_)));
        assert!(gateway.toggles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn toggling_someone_else_goes_through() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = AdminService::new(gateway.clone());
        service.toggle_admin_role(&identity(1, true), 2).await.unwrap();
        assert_eq!(*gateway.toggles.lock().unwrap(), vec![(1, 2)]);
    }

    #[tokio::test]
    async fn non_admins_are_refused() {
        let service = AdminService::new(Arc::new(RecordingGateway::default()));
        let err = service.list_users(&identity(5, false)).await.unwrap_err();
        assert!(matches!(err, BallkeeperError::Auth(_)));
        assert!(service.dashboard(&identity(1, true)).await.is_ok());
    }
}
