//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /hello             GET   固定问候语
//! - /items/{item_id}   GET   按 ID 返回合成物品

use axum::{routing::get, Router};

use super::handlers;

/// 创建所有路由
///
/// 处理器无共享状态，Router 状态为 `()`
pub fn create_routes() -> Router {
    Router::new()
        .route("/hello", get(handlers::hello))
        .route("/items/:item_id", get(handlers::get_item))
}
