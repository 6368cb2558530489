//! Shop Catalog API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/shops | GET | 商家列表 + 实时营业状态 (kind, category, open_now, at) |
//! | /api/shops/{id} | GET | 单个商家 + 实时营业状态 |
//! | /api/shops/{id}/status | GET | 仅营业状态 (at, strict) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{ShopView, StatusBadge};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/shops", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", get(handler::status))
}
