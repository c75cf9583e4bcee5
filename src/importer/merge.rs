// ==========================================
// Merge engine - join, sort, persist
// ==========================================
// Left-join inventory with prices, then with the category dictionary.
// Every inventory row survives: unmatched prices become 0, unmatched
// categories the UNCATEGORIZED sentinel. Output order is
// (Category, PartNumber) ascending, which makes re-runs byte-identical.
// ==========================================

use crate::domain::{InventoryRow, SkuRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::UNCATEGORIZED;
use std::collections::HashMap;
use std::path::Path;

pub struct MergeEngine;

impl MergeEngine {
    /// Combine the three normalized tables into the canonical record set.
    pub fn merge(
        &self,
        inventory: Vec<InventoryRow>,
        prices: &HashMap<String, f64>,
        categories: &HashMap<String, String>,
    ) -> Vec<SkuRecord> {
        let mut records: Vec<SkuRecord> = inventory
            .into_iter()
            .map(|row| SkuRecord {
                price: prices.get(&row.part_number).copied().unwrap_or(0.0),
                category: categories
                    .get(&row.part_number)
                    .cloned()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                part_number: row.part_number,
                description: row.description,
                in_stock: row.in_stock,
                committed: row.committed,
                ordered: row.ordered,
                available: row.available,
            })
            .collect();

        records.sort_by(|a, b| {
            (a.category.as_str(), a.part_number.as_str())
                .cmp(&(b.category.as_str(), b.part_number.as_str()))
        });

        records
    }

    /// Persist the canonical record set as UTF-8 comma-separated text
    /// with a header row. This file is the sole contract with the portal.
    pub fn write_canonical<P: AsRef<Path>>(
        &self,
        records: &[SkuRecord],
        path: P,
    ) -> ImportResult<()> {
        let path = path.as_ref();
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| ImportError::OutputWriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        // Header written explicitly: the contract includes it even when
        // the record set is empty.
        writer
            .write_record(SkuRecord::COLUMNS)
            .map_err(|e| ImportError::OutputWriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        for record in records {
            writer
                .serialize(record)
                .map_err(|e| ImportError::OutputWriteError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
        }

        writer.flush().map_err(|e| ImportError::OutputWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory_row(part_number: &str, available: f64) -> InventoryRow {
        InventoryRow {
            part_number: part_number.to_string(),
            description: format!("PART {part_number}"),
            in_stock: available,
            committed: 0.0,
            ordered: 0.0,
            available,
        }
    }

    #[test]
    fn test_merge_left_join_defaults() {
        let inventory = vec![inventory_row("001", 20.0), inventory_row("002", 3.0)];
        let prices = HashMap::from([("002".to_string(), 9.5)]);
        let categories = HashMap::from([("002".to_string(), "RODAMIENTOS".to_string())]);

        let records = MergeEngine.merge(inventory, &prices, &categories);

        assert_eq!(records.len(), 2);
        let unmatched = records.iter().find(|r| r.part_number == "001").unwrap();
        assert_eq!(unmatched.price, 0.0);
        assert_eq!(unmatched.category, UNCATEGORIZED);
        let matched = records.iter().find(|r| r.part_number == "002").unwrap();
        assert_eq!(matched.price, 9.5);
        assert_eq!(matched.category, "RODAMIENTOS");
    }

    #[test]
    fn test_merge_sorts_by_category_then_part_number() {
        let inventory = vec![
            inventory_row("900", 1.0),
            inventory_row("100", 1.0),
            inventory_row("500", 1.0),
        ];
        let categories = HashMap::from([
            ("900".to_string(), "ABRASIVOS".to_string()),
            ("100".to_string(), "RODAMIENTOS".to_string()),
            ("500".to_string(), "ABRASIVOS".to_string()),
        ]);

        let records = MergeEngine.merge(inventory, &HashMap::new(), &categories);
        let order: Vec<&str> = records.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(order, vec!["500", "900", "100"]);
    }

    #[test]
    fn test_merge_preserves_inventory_row_count() {
        let inventory: Vec<InventoryRow> =
            (0..37).map(|i| inventory_row(&format!("{i:03}"), i as f64)).collect();
        let records = MergeEngine.merge(inventory, &HashMap::new(), &HashMap::new());
        assert_eq!(records.len(), 37);
    }

    #[test]
    fn test_write_canonical_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos_disponibilidad.csv");

        let records = MergeEngine.merge(
            vec![inventory_row("001", 20.0)],
            &HashMap::new(),
            &HashMap::new(),
        );
        MergeEngine.write_canonical(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("PartNumber,Description,Category,InStock,Committed,Ordered,Available,Price")
        );
        assert_eq!(lines.next(), Some("001,PART 001,UNCATEGORIZED,20.0,0.0,0.0,20.0,0.0"));
    }

    #[test]
    fn test_write_canonical_empty_set_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos_disponibilidad.csv");

        MergeEngine.write_canonical(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("PartNumber,Description,Category,InStock,Committed,Ordered,Available,Price")
        );
        assert_eq!(lines.next(), None);
    }
}
