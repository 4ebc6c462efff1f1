use crate::domain::Item as DomainItem;
use async_graphql::Object;

/// GraphQL representation of a normalized cargo item
#[derive(Clone)]
pub struct Item {
    pub inner: DomainItem,
}

impl From<DomainItem> for Item {
    fn from(item: DomainItem) -> Self {
        Self { inner: item }
    }
}

#[Object]
impl Item {
    /// Name of the item type this item refers to; references are not
    /// validated against the type list
    async fn item_type_name(&self) -> &str {
        &self.inner.item_type_name
    }

    /// Number of units
    async fn quantity(&self) -> i64 {
        self.inner.quantity
    }
}
