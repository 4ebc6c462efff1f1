use async_graphql::Object;

use super::{Item, ItemType};

/// The pair of normalized lists returned by the normalize mutation
pub struct NormalizeResult {
    pub item_types: Vec<ItemType>,
    pub items: Vec<Item>,
}

#[Object]
impl NormalizeResult {
    /// Normalized item type records, one per raw type entry
    async fn item_types(&self) -> &[ItemType] {
        &self.item_types
    }

    /// Normalized item records, one per raw item entry
    async fn items(&self) -> &[Item] {
        &self.items
    }
}
