//! Favorites API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Serialize;
use shared::error::ErrorCode;
use shared::hours::format_time_ago;
use shared::models::{FavoriteCreate, FavoriteShop};
use shared::util::millis_to_utc;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Saved shop with a relative "saved" label
#[derive(Debug, Serialize)]
pub struct FavoriteView {
    #[serde(flatten)]
    pub favorite: FavoriteShop,
    pub saved_ago: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteState {
    pub id: i64,
    pub is_favorite: bool,
}

/// List favorites, oldest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<FavoriteView>>> {
    let now = Utc::now();
    let views = state
        .favorites
        .list()?
        .into_iter()
        .map(|favorite| {
            let saved_ago = millis_to_utc(favorite.timestamp)
                .map(|then| format_time_ago(then, now))
                .unwrap_or_default();
            FavoriteView {
                favorite,
                saved_ago,
            }
        })
        .collect();
    Ok(Json(views))
}

/// Save a shop; saving it twice keeps the original entry
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<FavoriteCreate>,
) -> AppResult<Json<FavoriteState>> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::required_field("name"));
    }

    state.favorites.add(payload.id, name)?;
    Ok(Json(FavoriteState {
        id: payload.id,
        is_favorite: true,
    }))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FavoriteState>> {
    if !state.favorites.remove(id)? {
        return Err(AppError::new(ErrorCode::FavoriteNotFound).with_detail("shop_id", id));
    }
    Ok(Json(FavoriteState {
        id,
        is_favorite: false,
    }))
}

/// Toggle a catalog shop, its name is taken from the catalog
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FavoriteState>> {
    let shop = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::shop_not_found(id))?;
    let is_favorite = state.favorites.toggle(id, &shop.name)?;
    Ok(Json(FavoriteState { id, is_favorite }))
}
