//! Follows API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::FollowMap;

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct FollowState {
    pub user_id: String,
    pub following: bool,
}

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<FollowMap>> {
    Ok(Json(state.follows.follow_map()?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<FollowState>> {
    let following = state.follows.is_following(&user_id)?;
    Ok(Json(FollowState { user_id, following }))
}

pub async fn toggle(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<FollowState>> {
    let following = state.follows.toggle(&user_id)?;
    Ok(Json(FollowState { user_id, following }))
}
