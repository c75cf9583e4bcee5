// ==========================================
// Alert view (alertas tab)
// ==========================================
// SKUs at or below a configurable availability threshold, ascending by
// availability. Threshold is clamped to the slider range; recomputation
// is deterministic with no hidden state.
// ==========================================

use crate::domain::SkuRecord;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_THRESHOLD: f64 = 10.0;
pub const MIN_THRESHOLD: f64 = 0.0;
pub const MAX_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Serialize)]
pub struct AlertResponse {
    /// SKUs with Available <= threshold, ascending by Available.
    pub rows: Vec<SkuRecord>,
    /// SKUs with exactly zero availability.
    pub depleted_count: usize,
    /// SKUs at or below the threshold (equals rows.len()).
    pub at_or_below_count: usize,
    /// The threshold actually applied, after clamping.
    pub threshold: f64,
}

// ==========================================
// AlertApi
// ==========================================
pub struct AlertApi {
    records: Arc<Vec<SkuRecord>>,
}

impl AlertApi {
    pub fn new(records: Arc<Vec<SkuRecord>>) -> Self {
        Self { records }
    }

    /// Alerts at the default threshold.
    pub fn alerts(&self) -> AlertResponse {
        self.alerts_at(DEFAULT_THRESHOLD)
    }

    /// Alerts at an explicit threshold, clamped to the slider range.
    pub fn alerts_at(&self, threshold: f64) -> AlertResponse {
        let threshold = threshold.clamp(MIN_THRESHOLD, MAX_THRESHOLD);

        let mut rows: Vec<SkuRecord> = self
            .records
            .iter()
            .filter(|r| r.available <= threshold)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.available
                .total_cmp(&b.available)
                .then_with(|| a.part_number.cmp(&b.part_number))
        });

        let depleted_count = rows.iter().filter(|r| r.available == 0.0).count();
        AlertResponse {
            depleted_count,
            at_or_below_count: rows.len(),
            threshold,
            rows,
        }
    }
}
