// ==========================================
// Field mapper - source columns -> normalized tables
// ==========================================
// Inventory and price exports carry fixed SAP column names (fatal when
// missing). The category dictionary has free-form headers, detected
// heuristically with a documented positional fallback.
// ==========================================

use crate::domain::InventoryRow;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawTable;
use std::collections::HashMap;

// ===== SAP export column names =====
pub const COL_ITEM_NO: &str = "Item No.";
pub const COL_DESCRIPTION: &str = "Item Description";
pub const COL_IN_STOCK: &str = "In Stock";
pub const COL_COMMITTED: &str = "Committed";
pub const COL_ORDERED: &str = "Ordered";
pub const COL_AVAILABLE: &str = "Available";
pub const COL_PRICE: &str = "Primary Currency - Price";

const INVENTORY_COLUMNS: [&str; 6] = [
    COL_ITEM_NO,
    COL_DESCRIPTION,
    COL_IN_STOCK,
    COL_COMMITTED,
    COL_ORDERED,
    COL_AVAILABLE,
];

// ==========================================
// ColumnDetection - dictionary header resolution
// ==========================================
// Explicit result so the fallback rule is visible and testable: when no
// header matches, the FIRST column is the identifier and the LAST column
// is the category. This is an intentional safety net for hand-maintained
// dictionary files, not an error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnDetection {
    /// Headers matched the "part"+"id" / "categ" substring heuristic.
    HeaderMatch { id: String, category: String },
    /// No header matched; positional first/last fallback in effect.
    Positional { id: String, category: String },
}

impl ColumnDetection {
    pub fn id_column(&self) -> &str {
        match self {
            ColumnDetection::HeaderMatch { id, .. } => id,
            ColumnDetection::Positional { id, .. } => id,
        }
    }

    pub fn category_column(&self) -> &str {
        match self {
            ColumnDetection::HeaderMatch { category, .. } => category,
            ColumnDetection::Positional { category, .. } => category,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ColumnDetection::Positional { .. })
    }
}

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMapper {
    pub fn new() -> Self {
        Self { cleaner: DataCleaner }
    }

    // ==========================================
    // Inventory export -> InventoryRow list
    // ==========================================

    /// Map the inventory table. Rows with an empty key are dropped;
    /// a missing required column is fatal.
    pub fn map_inventory(&self, table: &RawTable) -> ImportResult<Vec<InventoryRow>> {
        for column in INVENTORY_COLUMNS {
            if !table.has_column(column) {
                return Err(ImportError::MissingColumn {
                    source_name: "inventory".to_string(),
                    column: column.to_string(),
                });
            }
        }

        let mut rows = Vec::new();
        for raw in &table.rows {
            let part_number = match self.cleaner.normalize_key(raw.get(COL_ITEM_NO)) {
                Some(key) => key,
                None => continue,
            };

            rows.push(InventoryRow {
                part_number,
                description: raw
                    .get(COL_DESCRIPTION)
                    .map(|v| self.cleaner.clean_text(v, false))
                    .unwrap_or_default(),
                in_stock: self.cleaner.clean_numeric(raw.get(COL_IN_STOCK)),
                committed: self.cleaner.clean_numeric(raw.get(COL_COMMITTED)),
                ordered: self.cleaner.clean_numeric(raw.get(COL_ORDERED)),
                available: self.cleaner.clean_numeric(raw.get(COL_AVAILABLE)),
            });
        }

        Ok(rows)
    }

    // ==========================================
    // Price export -> part number -> price map
    // ==========================================

    /// Map the price table. Duplicate part numbers keep the LAST
    /// occurrence (prices should reflect the latest export line).
    pub fn map_prices(&self, table: &RawTable) -> ImportResult<HashMap<String, f64>> {
        for column in [COL_ITEM_NO, COL_PRICE] {
            if !table.has_column(column) {
                return Err(ImportError::MissingColumn {
                    source_name: "prices".to_string(),
                    column: column.to_string(),
                });
            }
        }

        let mut prices = HashMap::new();
        for raw in &table.rows {
            let part_number = match self.cleaner.normalize_key(raw.get(COL_ITEM_NO)) {
                Some(key) => key,
                None => continue,
            };
            // insert overwrites: keep-last
            prices.insert(part_number, self.cleaner.clean_numeric(raw.get(COL_PRICE)));
        }

        Ok(prices)
    }

    // ==========================================
    // Category dictionary -> part number -> category map
    // ==========================================

    /// Detect the identifier and category columns by header substring,
    /// falling back to first/last column positionally.
    pub fn detect_dictionary_columns(&self, headers: &[String]) -> ImportResult<ColumnDetection> {
        if headers.is_empty() {
            return Err(ImportError::EmptySource("dictionary".to_string()));
        }

        let id = headers.iter().find(|h| {
            let lower = h.to_lowercase();
            lower.contains("part") && lower.contains("id")
        });
        let category = headers
            .iter()
            .find(|h| h.to_lowercase().contains("categ"));

        match (id, category) {
            (Some(id), Some(category)) => Ok(ColumnDetection::HeaderMatch {
                id: id.clone(),
                category: category.clone(),
            }),
            _ => Ok(ColumnDetection::Positional {
                id: headers[0].clone(),
                category: headers[headers.len() - 1].clone(),
            }),
        }
    }

    /// Map the dictionary table. Category values are trimmed and
    /// upper-cased; duplicate part numbers keep the FIRST occurrence
    /// (an assigned category should not silently change).
    pub fn map_categories(
        &self,
        table: &RawTable,
    ) -> ImportResult<(HashMap<String, String>, ColumnDetection)> {
        let detection = self.detect_dictionary_columns(&table.headers)?;
        if detection.is_fallback() {
            tracing::warn!(
                "dictionary headers did not match heuristic; using positional columns '{}' / '{}'",
                detection.id_column(),
                detection.category_column()
            );
        }

        let mut categories = HashMap::new();
        for raw in &table.rows {
            let part_number = match self.cleaner.normalize_key(raw.get(detection.id_column())) {
                Some(key) => key,
                None => continue,
            };
            let category = raw
                .get(detection.category_column())
                .map(|v| self.cleaner.clean_text(v, true))
                .unwrap_or_default();
            if category.is_empty() {
                continue;
            }
            // entry/or_insert: keep-first
            categories.entry(part_number).or_insert(category);
        }

        Ok((categories, detection))
    }
}
