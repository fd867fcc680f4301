//! Item - 物品值对象
//!
//! 物品不落库：每次请求按 ID 现场构造，名称恒为固定值

/// 物品名称固定值
pub const SAMPLE_ITEM_NAME: &str = "Sample Item";

/// 物品唯一标识
///
/// 由调用方通过路径参数提供，不做存在性校验，0 和负值同样合法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 物品值对象
///
/// 单次请求内构造，响应序列化后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
}

impl Item {
    /// 按 ID 构造合成物品，名称恒为 [`SAMPLE_ITEM_NAME`]
    pub fn sample(id: ItemId) -> Self {
        Self {
            id,
            name: SAMPLE_ITEM_NAME.to_string(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_keeps_id() {
        let item = Item::sample(ItemId::new(42));
        assert_eq!(item.id().value(), 42);
    }

    #[test]
    fn test_sample_name_is_constant() {
        let item = Item::sample(ItemId::new(1));
        assert_eq!(item.name(), "Sample Item");
    }

    #[test]
    fn test_zero_and_negative_ids_are_accepted() {
        assert_eq!(Item::sample(ItemId::new(0)).id().value(), 0);
        assert_eq!(Item::sample(ItemId::new(-7)).id().value(), -7);
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(-42).to_string(), "-42");
    }
}
