// ==========================================
// Portal de Disponibilidad de Materiales - Core Library
// ==========================================
// Pipeline: SAP exports -> merge stage -> canonical CSV -> portal views
// Positioning: batch-then-serve reporting tool (read-only views)
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Importer layer - merge stage (external data)
pub mod importer;

// Configuration layer - file paths
pub mod config;

// Logging
pub mod logging;

// API layer - portal views
pub mod api;

// Application layer - shared state
pub mod app;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::StockLevel;

// Domain entities
pub use domain::{InventoryRow, SkuRecord};

// Importer
pub use importer::{MergeEngine, MergeReport};

// API
pub use api::{AlertApi, ExportApi, SearchApi, SummaryApi};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Portal de Disponibilidad de Materiales";

// Sentinel category for SKUs missing from the dictionary
pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
