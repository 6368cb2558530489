use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::middleware;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API
        .merge(api::health::router())
        // Catalog with live status
        .merge(api::shops::router())
        // Ad-hoc hours evaluation
        .merge(api::hours::router())
        // Preferences
        .merge(api::favorites::router())
        .merge(api::follows::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the integration tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let request_timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        // ========== Tower HTTP Middleware ==========
        // Timeout - abort slow requests
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Access log with the status evaluation context
        .layer(axum_middleware::from_fn(middleware::access_log))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Generate unique ID for each request (outermost, runs first)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}
