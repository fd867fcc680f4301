//! Domain Layer - 领域层
//!
//! 单一限界上下文: Item（合成物品）

mod item;

pub use item::{Item, ItemId, SAMPLE_ITEM_NAME};
