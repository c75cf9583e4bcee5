// ==========================================
// SKU domain model
// ==========================================
// SkuRecord is the canonical per-part row: written by the merge stage,
// read-only for the portal. Column names match the canonical CSV header.
// ==========================================

use crate::domain::types::StockLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// SkuRecord - canonical merged row
// ==========================================
// One row per distinct part number. StockLevel is intentionally a method,
// not a field, so it can never drift from Available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    #[serde(rename = "PartNumber")]
    pub part_number: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "InStock")]
    pub in_stock: f64,

    #[serde(rename = "Committed")]
    pub committed: f64,

    #[serde(rename = "Ordered")]
    pub ordered: f64,

    #[serde(rename = "Available")]
    pub available: f64,

    #[serde(rename = "Price")]
    pub price: f64,
}

impl SkuRecord {
    /// Canonical column order, shared by the CSV contract and the export.
    pub const COLUMNS: [&'static str; 8] = [
        "PartNumber",
        "Description",
        "Category",
        "InStock",
        "Committed",
        "Ordered",
        "Available",
        "Price",
    ];

    /// Derived stock classification, always consistent with `available`.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_available(self.available)
    }

    /// Case-insensitive substring match on part number OR description.
    pub fn matches_text(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.part_number.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
    }
}

// ==========================================
// InventoryRow - normalized inventory source row
// ==========================================
// Intermediate product of the source normalizer; lives only inside the
// merge pipeline. Quantities are already cleaned (non-negative, 0 default).
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub part_number: String,
    pub description: String,
    pub in_stock: f64,
    pub committed: f64,
    pub ordered: f64,
    pub available: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(description: &str, available: f64) -> SkuRecord {
        SkuRecord {
            part_number: "P-001".to_string(),
            description: description.to_string(),
            category: "ABRASIVOS".to_string(),
            in_stock: available,
            committed: 0.0,
            ordered: 0.0,
            available,
            price: 1.0,
        }
    }

    #[test]
    fn test_stock_level_follows_available() {
        assert_eq!(record("x", 0.0).stock_level(), StockLevel::Depleted);
        assert_eq!(record("x", 7.0).stock_level(), StockLevel::Low);
        assert_eq!(record("x", 42.0).stock_level(), StockLevel::Medium);
        assert_eq!(record("x", 51.0).stock_level(), StockLevel::High);
    }

    #[test]
    fn test_matches_text_is_case_insensitive_substring() {
        let r = record("Ball Bearing Assembly", 5.0);
        assert!(r.matches_text("bearing"));
        assert!(r.matches_text("BEARING"));
        assert!(r.matches_text("p-001"));
        assert!(!r.matches_text("coupling"));
    }
}
