// ==========================================
// Search view (buscar tab)
// ==========================================
// Composable AND filters over the canonical table: free-text substring
// match (part number OR description, case-insensitive), exact category,
// stock level inclusion set, plus an enumerated sort key. Non-destructive:
// every call filters a fresh copy.
// ==========================================

use crate::domain::types::StockLevel;
use crate::domain::SkuRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// SortKey - enumerated sort options
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    PartNumberAsc,
    AvailableAsc,
    AvailableDesc,
    PriceAsc,
    PriceDesc,
}

// ==========================================
// SearchRequest / SearchResponse
// ==========================================

/// All filters optional; empty inputs are no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Substring to match against part number or description.
    pub query: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Stock level inclusion set; empty means all levels.
    pub stock_levels: Vec<StockLevel>,
    pub sort_by: SortKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub rows: Vec<SkuRecord>,
    /// Rows matching the filters.
    pub matched: usize,
    /// Rows in the canonical table.
    pub total: usize,
}

// ==========================================
// SearchApi
// ==========================================
pub struct SearchApi {
    records: Arc<Vec<SkuRecord>>,
}

impl SearchApi {
    pub fn new(records: Arc<Vec<SkuRecord>>) -> Self {
        Self { records }
    }

    /// Apply the request's filters and sort; never mutates the table.
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let query = request
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let mut rows: Vec<SkuRecord> = self
            .records
            .iter()
            .filter(|r| query.map_or(true, |q| r.matches_text(q)))
            .filter(|r| {
                request
                    .category
                    .as_deref()
                    .map_or(true, |c| r.category == c)
            })
            .filter(|r| {
                request.stock_levels.is_empty()
                    || request.stock_levels.contains(&r.stock_level())
            })
            .cloned()
            .collect();

        match request.sort_by {
            SortKey::PartNumberAsc => rows.sort_by(|a, b| a.part_number.cmp(&b.part_number)),
            SortKey::AvailableAsc => rows.sort_by(|a, b| a.available.total_cmp(&b.available)),
            SortKey::AvailableDesc => rows.sort_by(|a, b| b.available.total_cmp(&a.available)),
            SortKey::PriceAsc => rows.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => rows.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        SearchResponse {
            matched: rows.len(),
            total: self.records.len(),
            rows,
        }
    }

    /// Distinct category names, sorted, for the category selector.
    pub fn list_categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.category.clone())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
