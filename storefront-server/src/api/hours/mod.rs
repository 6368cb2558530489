//! Opening Hours API Module
//!
//! Evaluate arbitrary hours without a catalog entry.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/hours", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/status", post(handler::status))
        .route("/format", get(handler::format))
}
