//! Favorites API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/favorites | GET | 收藏列表 |
//! | /api/favorites | POST | 添加收藏 |
//! | /api/favorites/{id} | DELETE | 取消收藏 |
//! | /api/favorites/{id}/toggle | POST | 切换收藏 |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/favorites", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::add))
        .route("/{id}", delete(handler::remove))
        .route("/{id}/toggle", post(handler::toggle))
}
