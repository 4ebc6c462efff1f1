pub mod item;
pub mod item_type;
pub mod result;

pub use item::Item;
pub use item_type::ItemType;
pub use result::NormalizeResult;
