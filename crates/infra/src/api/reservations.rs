//! Calendar reservation window endpoint

use std::sync::Arc;

use async_trait::async_trait;
use ballkeeper_core::calendar::ReservationSource;
use ballkeeper_domain::{FetchWindow, ItemId, ReservationRecord, Result};
use tracing::{debug, instrument};

use crate::http::HttpClient;

const CALENDAR_PATH: &str = "/api/reservations/calendar";

/// `GET /api/reservations/calendar?itemId=&start=&end=`
pub struct ReservationApi {
    http: Arc<HttpClient>,
}

impl ReservationApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReservationSource for ReservationApi {
    #[instrument(skip(self, window), fields(window = %window))]
    async fn fetch_reservation_window(
        &self,
        item_id: ItemId,
        window: &FetchWindow,
    ) -> Result<Vec<ReservationRecord>> {
        let item = item_id.to_string();
        let start = window.start_param();
        let end = window.end_param();
        let query = [("itemId", item.as_str()), ("start", start.as_str()), ("end", end.as_str())];

        let records: Vec<ReservationRecord> = self.http.get_json(CALENDAR_PATH, &query).await?;
        debug!(count = records.len(), "Fetched reservation window");
        Ok(records)
    }
}
