// ==========================================
// Merge pipeline - stage orchestration
// ==========================================
// Batch job: read the three exports, normalize, join, persist. Any fatal
// error aborts the run with a diagnostic; the fix is operator intervention
// and a re-run, never a retry.
// ==========================================

use crate::config::PortalConfig;
use crate::domain::SkuRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{ExcelParser, Utf16TabParser};
use crate::importer::merge::MergeEngine;
use serde::Serialize;
use std::collections::HashSet;

// ==========================================
// MergeReport - run summary
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub inventory_rows: usize,
    pub price_rows: usize,
    pub dictionary_rows: usize,
    pub output_rows: usize,
    pub category_count: usize,
    pub total_available: f64,
    pub depleted_count: usize,
    pub low_stock_count: usize,
}

impl MergeReport {
    fn from_records(
        records: &[SkuRecord],
        inventory_rows: usize,
        price_rows: usize,
        dictionary_rows: usize,
    ) -> Self {
        let categories: HashSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
        Self {
            inventory_rows,
            price_rows,
            dictionary_rows,
            output_rows: records.len(),
            category_count: categories.len(),
            total_available: records.iter().map(|r| r.available).sum(),
            depleted_count: records.iter().filter(|r| r.available == 0.0).count(),
            low_stock_count: records
                .iter()
                .filter(|r| r.available > 0.0 && r.available <= 10.0)
                .count(),
        }
    }
}

/// Run the full merge stage and persist the canonical CSV.
pub fn run_merge(config: &PortalConfig) -> ImportResult<MergeReport> {
    let mapper = FieldMapper::new();

    tracing::info!("Reading inventory: {}", config.inventory_path.display());
    let inventory_table = Utf16TabParser.parse(&config.inventory_path)?;
    let inventory = mapper.map_inventory(&inventory_table)?;
    tracing::info!("{} SKUs found", inventory.len());

    tracing::info!("Reading prices: {}", config.price_path.display());
    let price_table = Utf16TabParser.parse(&config.price_path)?;
    let prices = mapper.map_prices(&price_table)?;
    tracing::info!("{} prices loaded", prices.len());

    tracing::info!("Reading category dictionary: {}", config.dictionary_path.display());
    let dictionary_table = ExcelParser.parse(&config.dictionary_path)?;
    let (categories, detection) = mapper.map_categories(&dictionary_table)?;
    tracing::info!(
        "{} categories loaded (id column '{}', category column '{}')",
        categories.len(),
        detection.id_column(),
        detection.category_column()
    );

    tracing::info!("Merging sources...");
    let inventory_rows = inventory.len();
    let price_rows = prices.len();
    let dictionary_rows = categories.len();
    let records = MergeEngine.merge(inventory, &prices, &categories);

    MergeEngine.write_canonical(&records, &config.canonical_path)?;
    tracing::info!(
        "{} SKUs written to {}",
        records.len(),
        config.canonical_path.display()
    );

    Ok(MergeReport::from_records(
        &records,
        inventory_rows,
        price_rows,
        dictionary_rows,
    ))
}
