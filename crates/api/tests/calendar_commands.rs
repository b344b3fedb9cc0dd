//! Host commands against a mock BallKeeper backend.

use ballkeeper_domain::{
    BallkeeperError, CalendarPhase, ChatSender, Config, EventStyle, Granularity, UserIdentity,
};
use ballkeeper_lib::{commands, AppContext};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context(server: &MockServer) -> AppContext {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.calendar.retry_max_attempts = 1;
    config.notifications.enabled = false;
    AppContext::from_config(config).expect("context")
}

async fn mount_items(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Tennis court", "description": "Outdoor, floodlit"},
            {"id": 9, "name": "Basketball"}
        ])))
        .mount(server)
        .await;
}

fn member() -> UserIdentity {
    UserIdentity { id: 3, name: "Alice".into(), is_admin: false }
}

#[tokio::test]
async fn load_calendar_shows_catalog_label_and_events() {
    let server = MockServer::start().await;
    mount_items(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/reservations/calendar"))
        .and(query_param("itemId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "startTime": "2024-06-20T10:00:00", "endTime": "2024-06-20T12:00:00", "status": "APPROVED"},
            {"id": 2, "startTime": "2024-06-21T09:00:00", "endTime": "2024-06-21T10:00:00", "status": "PENDING"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);
    let target = commands::resolve_item(&ctx, 7).await.unwrap();
    assert_eq!(target.label, "Tennis court");

    let snapshot = commands::load_calendar(&ctx, target).await.unwrap();
    assert_eq!(snapshot.phase, CalendarPhase::Ready);
    assert_eq!(snapshot.events.len(), 2);
    assert_eq!(snapshot.events[0].style, EventStyle::Booked);
    assert_eq!(snapshot.events[1].style, EventStyle::Tentative);
    assert_eq!(snapshot.navigation.item.unwrap().label, "Tennis court");
}

#[tokio::test]
async fn unknown_item_gets_a_generic_label() {
    let server = MockServer::start().await;
    mount_items(&server).await;

    let ctx = context(&server);
    let target = commands::resolve_item(&ctx, 42).await.unwrap();
    assert_eq!(target.id, 42);
    assert_eq!(target.label, "Item 42");
}

#[tokio::test]
async fn navigation_before_selection_sets_the_window_anchor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reservations/calendar"))
        .and(query_param("itemId", "9"))
        .and(query_param("start", "2024-05-21T00:00:00"))
        .and(query_param("end", "2024-07-20T00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);
    ctx.calendar.activate();
    let anchor = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    let snapshot = commands::navigate_calendar(&ctx, anchor, Granularity::Month).await.unwrap();
    assert_eq!(snapshot.phase, CalendarPhase::Idle);
    assert_eq!(snapshot.navigation.granularity, Granularity::Month);

    let snapshot = commands::load_calendar(
        &ctx,
        ballkeeper_domain::ItemTarget::new(9, "Basketball"),
    )
    .await
    .unwrap();
    assert_eq!(snapshot.phase, CalendarPhase::Ready);
    assert!(snapshot.events.is_empty());
}

#[tokio::test]
async fn rejected_fetch_is_reported_and_visible_in_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reservations/calendar"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad window"))
        .mount(&server)
        .await;

    let ctx = context(&server);
    let err = commands::load_calendar(&ctx, ballkeeper_domain::ItemTarget::new(7, "Tennis court"))
        .await
        .unwrap_err();
    assert!(matches!(err, BallkeeperError::InvalidInput(_)), "got {err:?}");

    let snapshot = commands::calendar_snapshot(&ctx);
    assert_eq!(snapshot.phase, CalendarPhase::Error);
    assert!(snapshot.has_error);

    let snapshot = commands::close_calendar(&ctx).await.unwrap();
    assert_eq!(snapshot.phase, CalendarPhase::Closed);
    assert!(snapshot.events.is_empty());
}

#[tokio::test]
async fn chat_requires_sign_in_and_keeps_the_transcript() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("The court is free after 14:00."))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);
    let err = commands::send_chat_message(&ctx, "hello").await.unwrap_err();
    assert!(matches!(err, BallkeeperError::Auth(_)));

    commands::sign_in(&ctx, member()).await.unwrap();
    assert_eq!(commands::current_user(&ctx).map(|u| u.id), Some(3));

    let reply = commands::send_chat_message(&ctx, "Is the court free?").await.unwrap();
    assert_eq!(reply.sender, ChatSender::Assistant);
    assert_eq!(reply.text, "The court is free after 14:00.");

    let history = commands::chat_history(&ctx).await;
    let senders: Vec<ChatSender> = history.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![ChatSender::Assistant, ChatSender::User, ChatSender::Assistant]);

    commands::sign_out(&ctx).await.unwrap();
    assert!(commands::current_user(&ctx).is_none());
    assert!(commands::chat_history(&ctx).await.is_empty());
}

#[tokio::test]
async fn admin_commands_refuse_members_without_calling_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = context(&server);
    commands::sign_in(&ctx, member()).await.unwrap();

    let err = commands::admin_dashboard(&ctx).await.unwrap_err();
    assert!(matches!(err, BallkeeperError::Auth(_)));
    assert!(!commands::notifications_connected(&ctx).await);
}

#[test]
fn legend_lists_two_blocking_entries_and_free_space() {
    let legend = commands::calendar_legend();
    assert_eq!(legend.iter().filter(|entry| !entry.available).count(), 2);
}
