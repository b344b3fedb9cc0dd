//! Admin endpoints

use std::sync::Arc;

use async_trait::async_trait;
use ballkeeper_core::AdminGateway;
use ballkeeper_domain::{DashboardMetrics, ReservationSummary, Result, UserAccount, UserId};
use reqwest::Method;
use tracing::instrument;

use crate::http::HttpClient;

/// Admin user management and dashboard, authorised by `adminId`.
pub struct AdminApi {
    http: Arc<HttpClient>,
}

impl AdminApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AdminGateway for AdminApi {
    #[instrument(skip(self))]
    async fn list_users(&self, admin_id: UserId) -> Result<Vec<UserAccount>> {
        self.http.get_json("/api/admin/users", &[("adminId", admin_id)]).await
    }

    #[instrument(skip(self))]
    async fn toggle_admin_role(&self, admin_id: UserId, target_id: UserId) -> Result<()> {
        let url = self.http.url(&format!("/api/admin/users/{target_id}/role"))?;
        let request = self.http.request(Method::PATCH, url).query(&[("adminId", admin_id)]);
        let response = self.http.send_once(request).await?;
        HttpClient::ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn user_reservations(
        &self,
        admin_id: UserId,
        target_id: UserId,
    ) -> Result<Vec<ReservationSummary>> {
        self.http
            .get_json(&format!("/api/admin/users/{target_id}/reservations"), &[("adminId", admin_id)])
            .await
    }

    #[instrument(skip(self))]
    async fn dashboard(&self, admin_id: UserId) -> Result<DashboardMetrics> {
        self.http.get_json("/api/admin/dashboard", &[("adminId", admin_id)]).await
    }
}

#[cfg(test)]
mod tests {
    use ballkeeper_domain::BallkeeperError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn api(server: &MockServer) -> AdminApi {
        AdminApi::new(Arc::new(HttpClient::builder().base_url(server.uri()).build().unwrap()))
    }

    #[tokio::test]
    async fn toggles_role_with_patch() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/admin/users/2/role"))
            .and(query_param("adminId", "1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        api(&server).toggle_admin_role(1, 2).await.unwrap();
    }

    #[tokio::test]
    async fn forbidden_toggle_maps_to_auth() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = api(&server).toggle_admin_role(1, 2).await.unwrap_err();
        assert!(matches!(err, BallkeeperError::Auth(_)));
    }

    #[tokio::test]
    async fn reads_users_reservations_and_dashboard() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/users"))
            .and(query_param("adminId", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "name": "Bob", "email": "bob@example.com", "admin": false}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/admin/users/2/reservations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 5, "itemName": "Basketball", "startTime": "2024-06-20T10:00:00",
                 "endTime": "2024-06-20T12:00:00", "status": "APPROVED"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/admin/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pendingReservationCount": 2,
                "activeItemCount": 5,
                "totalUserCount": 12,
                "dailyStats": [{"date": "2024-06-20", "count": 3}],
                "popularItems": [{"itemName": "Basketball", "count": 8}]
            })))
            .mount(&server)
            .await;

        let api = api(&server);
        let users = api.list_users(1).await.unwrap();
        assert_eq!(users[0].email, "bob@example.com");

        let history = api.user_reservations(1, 2).await.unwrap();
        assert_eq!(history[0].item_name, "Basketball");

        let dashboard = api.dashboard(1).await.unwrap();
        assert_eq!(dashboard.total_user_count, 12);
        assert_eq!(dashboard.popular_items[0].count, 8);
    }
}
