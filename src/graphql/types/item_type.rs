use crate::domain::ItemType as DomainItemType;
use async_graphql::Object;

/// GraphQL representation of a normalized cargo item type
#[derive(Clone)]
pub struct ItemType {
    pub inner: DomainItemType,
}

impl From<DomainItemType> for ItemType {
    fn from(item_type: DomainItemType) -> Self {
        Self { inner: item_type }
    }
}

#[Object]
impl ItemType {
    /// The canonical name of the item type
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Weight of a single unit in kilograms
    async fn unit_weight_kg(&self) -> f64 {
        self.inner.unit_weight_kg
    }

    /// Volume of a single unit in cubic meters
    async fn unit_volume_m3(&self) -> f64 {
        self.inner.unit_volume_m3
    }

    /// Length of a single unit in meters, when the source supplied one
    async fn length_m(&self) -> Option<f64> {
        self.inner.length_m
    }

    /// Width of a single unit in meters, when the source supplied one
    async fn width_m(&self) -> Option<f64> {
        self.inner.width_m
    }

    /// Height of a single unit in meters, when the source supplied one
    async fn height_m(&self) -> Option<f64> {
        self.inner.height_m
    }
}
