//! Item HTTP Handlers
//!
//! 按 ID 查询合成物品

use axum::{extract::Path, Json};

use crate::domain::{Item, ItemId};
use crate::infrastructure::http::dto::ItemResponse;

/// GET /items/{item_id} - 按 ID 返回合成物品
///
/// 路径段由 Path 提取器在路由边界解析为整数，解析失败时
/// 框架直接返回 400，处理器不会执行。
/// 不做存在性查询：任意整数都有结果。
pub async fn get_item(Path(item_id): Path<i64>) -> Json<ItemResponse> {
    let item = Item::sample(ItemId::new(item_id));
    Json(ItemResponse::from(item))
}
