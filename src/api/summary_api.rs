// ==========================================
// Summary view (resumen tab)
// ==========================================
// Read-only aggregates for the charts: per-category rollup, stock level
// distribution, top-20 by availability. Pure functions of the table.
// ==========================================

use crate::domain::types::StockLevel;
use crate::domain::SkuRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Rows in the top-availability chart.
pub const TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRollup {
    pub category: String,
    pub sku_count: usize,
    pub total_available: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevelCount {
    pub level: StockLevel,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSku {
    pub part_number: String,
    pub description: String,
    pub category: String,
    pub available: f64,
    pub price: f64,
}

// ==========================================
// SummaryApi
// ==========================================
pub struct SummaryApi {
    records: Arc<Vec<SkuRecord>>,
}

impl SummaryApi {
    pub fn new(records: Arc<Vec<SkuRecord>>) -> Self {
        Self { records }
    }

    /// Per-category SKU count and Available sum, ascending by count
    /// (the bar chart draws bottom-up). Ties break on category name so
    /// the output is deterministic.
    pub fn category_rollup(&self) -> Vec<CategoryRollup> {
        let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for record in self.records.iter() {
            let entry = groups.entry(record.category.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += record.available;
        }

        let mut rollup: Vec<CategoryRollup> = groups
            .into_iter()
            .map(|(category, (sku_count, total_available))| CategoryRollup {
                category: category.to_string(),
                sku_count,
                total_available,
            })
            .collect();

        rollup.sort_by(|a, b| {
            a.sku_count
                .cmp(&b.sku_count)
                .then_with(|| a.category.cmp(&b.category))
        });
        rollup
    }

    /// SKU count per stock level bucket, in bucket order.
    pub fn stock_level_distribution(&self) -> Vec<StockLevelCount> {
        StockLevel::ALL
            .iter()
            .map(|&level| StockLevelCount {
                level,
                count: self
                    .records
                    .iter()
                    .filter(|r| r.stock_level() == level)
                    .count(),
            })
            .collect()
    }

    /// The TOP_N SKUs with highest availability, descending.
    pub fn top_available(&self) -> Vec<TopSku> {
        let mut sorted: Vec<&SkuRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| {
            b.available
                .total_cmp(&a.available)
                .then_with(|| a.part_number.cmp(&b.part_number))
        });

        sorted
            .into_iter()
            .take(TOP_N)
            .map(|r| TopSku {
                part_number: r.part_number.clone(),
                description: r.description.clone(),
                category: r.category.clone(),
                available: r.available,
                price: r.price,
            })
            .collect()
    }
}
