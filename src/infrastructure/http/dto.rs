//! Data Transfer Objects
//!
//! 领域对象到序列化输出的显式映射

use serde::Serialize;

use crate::domain::Item;

/// 物品响应
///
/// 字段即线上格式: `{"id": <i64>, "name": <string>}`
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id().value(),
            name: item.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    #[test]
    fn test_item_response_field_mapping() {
        let response = ItemResponse::from(Item::sample(ItemId::new(7)));
        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Sample Item");
    }

    #[test]
    fn test_item_response_wire_format() {
        let response = ItemResponse::from(Item::sample(ItemId::new(-3)));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"id": -3, "name": "Sample Item"}));
    }
}
