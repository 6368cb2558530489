//! Shop Catalog API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::hours::{ShopStatus, StatusKind, shop_status, try_shop_status};
use shared::models::{OpeningHours, Shop, ShopKind};

use crate::catalog::ShopFilter;
use crate::core::ServerState;
use crate::utils::time::resolve_at;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub kind: Option<ShopKind>,
    pub category: Option<String>,
    /// Only shops that are open (including closing soon) at `at`
    pub open_now: Option<bool>,
    pub at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AtQuery {
    pub at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub at: Option<String>,
    #[serde(default)]
    pub strict: bool,
}

/// Display tokens for a status
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl From<StatusKind> for StatusBadge {
    fn from(kind: StatusKind) -> Self {
        Self {
            label: kind.label(),
            color: kind.color_class(),
            icon: kind.icon(),
        }
    }
}

/// Shop with its status at the reference time
#[derive(Debug, Clone, Serialize)]
pub struct ShopView {
    #[serde(flatten)]
    pub shop: Shop,
    /// Hours normalized for display, free-text hours only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_hours: Option<String>,
    pub status: ShopStatus,
    pub badge: StatusBadge,
    pub is_favorite: bool,
}

impl ShopView {
    fn build(shop: &Shop, now: NaiveDateTime, is_favorite: bool) -> Self {
        let status = shop_status(&shop.hours, now);
        let display_hours = match &shop.hours {
            OpeningHours::Text(text) => Some(shared::hours::format_opening_hours(text)),
            OpeningHours::Weekly(_) => None,
        };
        Self {
            shop: shop.clone(),
            display_hours,
            badge: status.status.into(),
            status,
            is_favorite,
        }
    }
}

/// List shops with live status
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ShopView>>> {
    let now = resolve_at(query.at.as_deref(), state.timezone())?;
    let favorites = state.favorites.list()?;
    let filter = ShopFilter {
        kind: query.kind,
        category: query.category.filter(|c| !c.is_empty() && c != "all"),
    };

    let shops = state
        .catalog
        .filter(&filter)
        .map(|shop| {
            let is_favorite = favorites.iter().any(|f| f.id == shop.id);
            ShopView::build(shop, now, is_favorite)
        })
        .filter(|view| !query.open_now.unwrap_or(false) || view.status.is_open)
        .collect();

    Ok(Json(shops))
}

/// Get one shop with live status
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<AtQuery>,
) -> AppResult<Json<ShopView>> {
    let shop = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::shop_not_found(id))?;
    let now = resolve_at(query.at.as_deref(), state.timezone())?;
    let is_favorite = state.favorites.is_favorite(id)?;
    Ok(Json(ShopView::build(shop, now, is_favorite)))
}

/// Status only; `strict=true` rejects hours that cannot be parsed
pub async fn status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<ShopStatus>> {
    let shop = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::shop_not_found(id))?;
    let now = resolve_at(query.at.as_deref(), state.timezone())?;

    let status = if query.strict {
        try_shop_status(&shop.hours, now)?
    } else {
        shop_status(&shop.hours, now)
    };
    Ok(Json(status))
}
