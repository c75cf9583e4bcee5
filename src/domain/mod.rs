// ==========================================
// Domain layer - entities and types
// ==========================================

pub mod sku;
pub mod types;

pub use sku::{InventoryRow, SkuRecord};
pub use types::StockLevel;
