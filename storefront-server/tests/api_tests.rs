//! HTTP API tests driving the full app (middleware included) with oneshot

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront_server::{Catalog, Config, RedbStore, ServerState, build_app};

fn test_state() -> ServerState {
    let config = Config::with_overrides("./target/test_work_dir", 0);
    let store = RedbStore::open_in_memory().unwrap();
    ServerState::with_parts(config, Catalog::seed(), Arc::new(store)).unwrap()
}

fn app(state: &ServerState) -> Router {
    build_app(state).with_state(state.clone())
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(state: &ServerState, uri: &str) -> (StatusCode, Value) {
    send(app(state), "GET", uri, None).await
}

async fn post(state: &ServerState, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send(app(state), "POST", uri, body).await
}

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let (status, body) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["shops"], 7);
}

#[tokio::test]
async fn test_request_id_header_is_set() {
    let state = test_state();
    let response = app(&state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_shop_closing_soon() {
    let state = test_state();
    // Fashion Hub, 9:00 AM - 9:00 PM, on a Monday evening
    let (status, body) = get(&state, "/api/shops/1?at=2026-01-05T20:45").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Fashion Hub");
    assert_eq!(body["status"]["is_open"], true);
    assert_eq!(body["status"]["status"], "closing-soon");
    assert_eq!(body["status"]["time_until_change"], "15m");
    assert_eq!(body["status"]["current_time"], "20:45");
    assert_eq!(body["badge"]["icon"], "🟡");
    assert_eq!(body["display_hours"], "9:00 - 9:00 PM");
    assert_eq!(body["is_favorite"], false);
}

#[tokio::test]
async fn test_overnight_shop() {
    let state = test_state();
    let (_, body) = get(&state, "/api/shops/7/status?at=2026-01-05T23:00").await;
    assert_eq!(body["is_open"], true);
    assert_eq!(body["next_status_time"], "Closes tomorrow at 02:00");
    assert_eq!(body["time_until_change"], "3h");
}

#[tokio::test]
async fn test_list_open_now() {
    let state = test_state();
    let (status, body) = get(&state, "/api/shops?open_now=true&at=2026-01-05T08:00").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 6]);
}

#[tokio::test]
async fn test_list_filters() {
    let state = test_state();
    let (_, body) = get(&state, "/api/shops?kind=wholesaler").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Textile Mart");

    let (_, body) = get(&state, "/api/shops?category=SALON").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["kind"], "service");

    let (_, body) = get(&state, "/api/shops?category=all").await;
    assert_eq!(body.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_unknown_shop_is_404() {
    let state = test_state();
    let (status, body) = get(&state, "/api/shops/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2001);
    assert_eq!(body["details"]["shop_id"], 999);
}

#[tokio::test]
async fn test_invalid_at_is_400() {
    let state = test_state();
    let (status, body) = get(&state, "/api/shops/1/status?at=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn test_hours_status_lenient_and_strict() {
    let state = test_state();

    let (status, body) = post(
        &state,
        "/api/hours/status",
        Some(json!({"hours": "10:00 AM - 9:00 PM", "at": "2026-01-05T08:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_open"], false);
    assert_eq!(body["next_status_time"], "Opens at 10:00");

    // unparseable hours fall back to 09:00 - 21:00
    let (status, body) = post(
        &state,
        "/api/hours/status",
        Some(json!({"hours": "whenever", "at": "2026-01-05T12:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_open"], true);
    assert_eq!(body["next_status_time"], "Closes at 21:00");

    let (status, body) = post(
        &state,
        "/api/hours/status",
        Some(json!({"hours": "whenever", "at": "2026-01-05T12:00", "strict": true})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_hours_status_weekly_schedule() {
    let state = test_state();
    let hours = json!([
        {"day": "Monday", "open": "09:00", "close": "17:00"},
        {"day": "Tuesday", "open": "10:00", "close": "18:00"}
    ]);
    let (_, body) = post(
        &state,
        "/api/hours/status",
        Some(json!({"hours": hours, "at": "2026-01-06T09:30"})),
    )
    .await;
    assert_eq!(body["is_open"], false);
    assert_eq!(body["status"], "opening-soon");
    assert_eq!(body["time_until_change"], "30m");
}

#[tokio::test]
async fn test_hours_status_weekly_overnight() {
    let state = test_state();
    let hours = json!([{"day": "Monday", "open": "18:00", "close": "02:00"}]);

    let (_, body) = post(
        &state,
        "/api/hours/status",
        Some(json!({"hours": hours, "at": "2026-01-05T01:00"})),
    )
    .await;
    assert_eq!(body["is_open"], false);
    assert_eq!(body["next_status_time"], "Opens at 18:00");

    let (status, body) = post(
        &state,
        "/api/hours/status",
        Some(json!({"hours": hours, "at": "2026-01-06T01:00", "strict": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_open"], true);
    assert_eq!(body["next_status_time"], "Closes at 02:00");
    assert_eq!(body["time_until_change"], "1h");
}

#[tokio::test]
async fn test_favorite_remove_reports_shop_id() {
    let state = test_state();
    let (status, body) = send(app(&state), "DELETE", "/api/favorites/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
    assert_eq!(body["message"], "Shop is not a favorite");
    assert_eq!(body["details"]["shop_id"], 5);
}

#[tokio::test]
async fn test_hours_format() {
    let state = test_state();
    let (_, body) = get(&state, "/api/hours/format?text=10:00%20AM%20-%209:00%20PM").await;
    assert_eq!(body["formatted"], "10:00 - 9:00 PM");
}

#[tokio::test]
async fn test_favorites_flow() {
    let state = test_state();

    let (_, body) = get(&state, "/api/favorites").await;
    assert_eq!(body, json!([]));

    let (status, body) = post(
        &state,
        "/api/favorites",
        Some(json!({"id": 3, "name": "Café Delight"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_favorite"], true);

    let (_, body) = post(&state, "/api/favorites/1/toggle", None).await;
    assert_eq!(body["is_favorite"], true);

    let (_, body) = get(&state, "/api/favorites").await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 3);
    assert_eq!(items[1]["name"], "Fashion Hub");
    assert_eq!(items[0]["saved_ago"], "Just now");

    let (_, body) = get(&state, "/api/shops/1").await;
    assert_eq!(body["is_favorite"], true);

    let (status, _) = send(app(&state), "DELETE", "/api/favorites/3", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(app(&state), "DELETE", "/api/favorites/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn test_favorite_requires_name() {
    let state = test_state();
    let (status, body) = post(&state, "/api/favorites", Some(json!({"id": 3, "name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["details"]["field"], "name");
}

#[tokio::test]
async fn test_toggle_unknown_shop() {
    let state = test_state();
    let (status, _) = post(&state, "/api/favorites/999/toggle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_follows() {
    let state = test_state();

    let (_, body) = get(&state, "/api/follows").await;
    assert_eq!(body["u2"], true);
    assert_eq!(body["u1"], false);

    let (_, body) = post(&state, "/api/follows/u1/toggle", None).await;
    assert_eq!(body, json!({"user_id": "u1", "following": true}));

    let (_, body) = get(&state, "/api/follows/u1").await;
    assert_eq!(body["following"], true);

    let (_, body) = get(&state, "/api/follows/stranger").await;
    assert_eq!(body["following"], false);
}
