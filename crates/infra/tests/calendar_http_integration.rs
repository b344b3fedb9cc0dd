//! Calendar engine driven through the REST adapter against a mock backend.

use std::sync::Arc;
use std::time::Duration;

use ballkeeper_core::calendar::{
    CalendarEngine, CalendarSettings, FixedClock, RetryPolicy, SyncError,
};
use ballkeeper_domain::{BallkeeperError, CalendarPhase, EventStyle, ItemTarget};
use ballkeeper_infra::{HttpClient, ReservationApi};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine(server: &MockServer, attempts: u32) -> CalendarEngine {
    let http = Arc::new(HttpClient::builder().base_url(server.uri()).build().unwrap());
    let settings = CalendarSettings {
        retry: RetryPolicy::new(attempts, Duration::from_millis(5), Duration::from_millis(20))
            .with_attempt_timeout(Duration::from_secs(5)),
        ..CalendarSettings::default()
    };
    CalendarEngine::with_clock(
        Arc::new(ReservationApi::new(http)),
        settings,
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())),
    )
}

#[tokio::test]
async fn open_loads_reservations_from_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reservations/calendar"))
        .and(query_param("itemId", "7"))
        .and(query_param("start", "2024-05-16T00:00:00"))
        .and(query_param("end", "2024-07-15T00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "start": "2024-06-20T10:00:00", "end": "2024-06-20T12:00:00", "status": "APPROVED"},
            {"id": 2, "start": "2024-06-22T09:00:00", "end": "2024-06-22T10:00:00", "status": "PENDING"},
            {"id": 3, "start": "2024-06-25T09:00:00", "end": "2024-06-25T10:00:00", "status": "RETURNED"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let engine = engine(&server, 1);
    let ticket = engine.open(ItemTarget::new(7, "Basketball")).ticket().unwrap();
    ticket.outcome().await.unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, CalendarPhase::Ready);
    let styles: Vec<EventStyle> = snapshot.events.iter().map(|e| e.style).collect();
    assert_eq!(styles, vec![EventStyle::Booked, EventStyle::Tentative, EventStyle::Occupied]);
}

#[tokio::test]
async fn unavailable_backend_is_retried_then_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let engine = engine(&server, 3);
    let applied = engine
        .open(ItemTarget::new(7, "Basketball"))
        .ticket()
        .unwrap()
        .outcome()
        .await
        .unwrap();
    assert_eq!(applied.attempts, 2);
    assert!(!engine.snapshot().has_error);
}

#[tokio::test]
async fn rejected_request_surfaces_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("itemId must be positive"))
        .expect(1)
        .mount(&server)
        .await;

    let engine = engine(&server, 3);
    let err = engine
        .open(ItemTarget::new(7, "Basketball"))
        .ticket()
        .unwrap()
        .outcome()
        .await
        .unwrap_err();
    match err {
        SyncError::TransportFailure { attempts: 1, source: BallkeeperError::InvalidInput(_), .. } => {}
        other => panic!("expected invalid input failure, got {other:?}"),
    }
    let snapshot = engine.snapshot();
    assert!(snapshot.has_error);
    assert!(snapshot.last_error.unwrap().contains("itemId must be positive"));
}
