use serde::{Deserialize, Serialize};

/// A normalized cargo item type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemType {
    pub name: String,
    pub unit_weight_kg: f64,
    pub unit_volume_m3: f64,
    pub length_m: Option<f64>,
    pub width_m: Option<f64>,
    pub height_m: Option<f64>,
}

/// A normalized cargo item referencing an item type by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_type_name: String,
    pub quantity: i64,
}
