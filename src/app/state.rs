// ==========================================
// Application state
// ==========================================
// The canonical table is loaded once, shared immutably via Arc, and
// passed explicitly to every view. No globals; invalidation is a merge
// re-run plus an application restart.
// ==========================================

use std::path::Path;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::{AlertApi, ExportApi, SearchApi, SummaryApi};
use crate::domain::SkuRecord;
use serde::Serialize;

// ==========================================
// HeaderMetrics - the dashboard figure cards
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderMetrics {
    pub total_skus: usize,
    pub total_available: f64,
    pub category_count: usize,
    pub depleted_count: usize,
    /// 0 < Available <= 10
    pub low_stock_count: usize,
}

// ==========================================
// AppState
// ==========================================

/// Shared application state: the loaded canonical table plus one
/// instance of each view API over it.
pub struct AppState {
    pub records: Arc<Vec<SkuRecord>>,
    pub search_api: SearchApi,
    pub summary_api: SummaryApi,
    pub alert_api: AlertApi,
    pub export_api: ExportApi,
}

impl AppState {
    /// Load the canonical CSV produced by the merge stage.
    pub fn load<P: AsRef<Path>>(canonical_path: P) -> ApiResult<Self> {
        let path = canonical_path.as_ref();
        if !path.exists() {
            return Err(ApiError::DataFileNotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: SkuRecord = result?;
            records.push(record);
        }

        tracing::info!("Loaded {} SKUs from {}", records.len(), path.display());
        Ok(Self::from_records(records))
    }

    /// Build state from already-loaded records (tests, embedding).
    pub fn from_records(records: Vec<SkuRecord>) -> Self {
        let records = Arc::new(records);
        Self {
            search_api: SearchApi::new(Arc::clone(&records)),
            summary_api: SummaryApi::new(Arc::clone(&records)),
            alert_api: AlertApi::new(Arc::clone(&records)),
            export_api: ExportApi::new(Arc::clone(&records)),
            records,
        }
    }

    /// The five header figure cards.
    pub fn metrics(&self) -> HeaderMetrics {
        let categories: std::collections::HashSet<&str> =
            self.records.iter().map(|r| r.category.as_str()).collect();
        HeaderMetrics {
            total_skus: self.records.len(),
            total_available: self.records.iter().map(|r| r.available).sum(),
            category_count: categories.len(),
            depleted_count: self.records.iter().filter(|r| r.available == 0.0).count(),
            low_stock_count: self
                .records
                .iter()
                .filter(|r| r.available > 0.0 && r.available <= 10.0)
                .count(),
        }
    }
}
