//! Opening Hours API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use shared::hours::{ShopStatus, format_opening_hours, shop_status, try_shop_status};
use shared::models::OpeningHours;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::time::resolve_at;

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub hours: OpeningHours,
    pub at: Option<String>,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub text: String,
    pub formatted: String,
}

/// Compute the status of the posted hours
pub async fn status(
    State(state): State<ServerState>,
    Json(req): Json<StatusRequest>,
) -> AppResult<Json<ShopStatus>> {
    let now = resolve_at(req.at.as_deref(), state.timezone())?;
    let status = if req.strict {
        try_shop_status(&req.hours, now)?
    } else {
        shop_status(&req.hours, now)
    };
    Ok(Json(status))
}

/// Normalize a free-text range for display
pub async fn format(Query(query): Query<FormatQuery>) -> Json<FormatResponse> {
    let formatted = format_opening_hours(&query.text);
    Json(FormatResponse {
        text: query.text,
        formatted,
    })
}
