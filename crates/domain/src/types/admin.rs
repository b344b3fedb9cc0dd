//! Admin endpoint payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::calendar::ReservationStatus;
use super::timestamp;

/// Reservation row in a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub id: i64,
    pub item_name: String,
    #[serde(with = "timestamp::remote")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timestamp::remote")]
    pub end_time: NaiveDateTime,
    pub status: ReservationStatus,
}

/// Reservation count for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,
    pub count: u64,
}

/// Reservation count for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularItem {
    pub item_name: String,
    pub count: u64,
}

/// Admin dashboard figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub pending_reservation_count: u64,
    pub active_item_count: u64,
    pub total_user_count: u64,
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
    #[serde(default)]
    pub popular_items: Vec<PopularItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_decodes_camel_case_payload() {
        let metrics: DashboardMetrics = serde_json::from_str(
            r#"{
                "pendingReservationCount": 3,
                "activeItemCount": 12,
                "totalUserCount": 40,
                "dailyStats": [{"date": "06-14", "count": 5}],
                "popularItems": [{"itemName": "Nike ball", "count": 9}]
            }"#,
        )
        .unwrap();

        assert_eq!(metrics.pending_reservation_count, 3);
        assert_eq!(metrics.daily_stats[0].count, 5);
        assert_eq!(metrics.popular_items[0].item_name, "Nike ball");
    }
}
