// ==========================================
// Export view (descargar tab)
// ==========================================
// Serializes the complete canonical table (StockLevel is derived and
// never exported) to an XLSX workbook. No filtering, ever.
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::SkuRecord;
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use std::sync::Arc;

pub const SHEET_NAME: &str = "Disponibilidad";

// ==========================================
// ExportApi
// ==========================================
pub struct ExportApi {
    records: Arc<Vec<SkuRecord>>,
}

impl ExportApi {
    pub fn new(records: Arc<Vec<SkuRecord>>) -> Self {
        Self { records }
    }

    /// Artifact name with the report date embedded.
    pub fn file_name(date: NaiveDate) -> String {
        format!("report_{}.xlsx", date.format("%Y-%m-%d"))
    }

    /// Serialize the full table to an in-memory workbook.
    pub fn export_workbook(&self) -> ApiResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in SkuRecord::COLUMNS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }

        for (idx, record) in self.records.iter().enumerate() {
            let row = (idx + 1) as u32;
            worksheet.write_string(row, 0, &record.part_number)?;
            worksheet.write_string(row, 1, &record.description)?;
            worksheet.write_string(row, 2, &record.category)?;
            worksheet.write_number(row, 3, record.in_stock)?;
            worksheet.write_number(row, 4, record.committed)?;
            worksheet.write_number(row, 5, record.ordered)?;
            worksheet.write_number(row, 6, record.available)?;
            worksheet.write_number(row, 7, record.price)?;
        }

        Ok(workbook.save_to_buffer()?)
    }

    /// Write the dated artifact into a directory, returning its path.
    pub fn export_to_dir<P: AsRef<Path>>(
        &self,
        dir: P,
        date: NaiveDate,
    ) -> ApiResult<std::path::PathBuf> {
        let path = dir.as_ref().join(Self::file_name(date));
        let buffer = self.export_workbook()?;
        std::fs::write(&path, buffer)
            .map_err(|e| crate::api::error::ApiError::ExportError(e.to_string()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(part_number: &str) -> SkuRecord {
        SkuRecord {
            part_number: part_number.to_string(),
            description: "Ball Bearing Assembly".to_string(),
            category: "RODAMIENTOS".to_string(),
            in_stock: 20.0,
            committed: 5.0,
            ordered: 0.0,
            available: 20.0,
            price: 4.5,
        }
    }

    #[test]
    fn test_file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(ExportApi::file_name(date), "report_2026-08-29.xlsx");
    }

    #[test]
    fn test_export_workbook_is_valid_zip() {
        let api = ExportApi::new(Arc::new(vec![record("001"), record("002")]));
        let buffer = api.export_workbook().unwrap();
        // XLSX is a zip container: PK magic
        assert_eq!(&buffer[0..2], b"PK");
    }

    #[test]
    fn test_export_to_dir_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let api = ExportApi::new(Arc::new(vec![record("001")]));
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let path = api.export_to_dir(dir.path(), date).unwrap();
        assert!(path.ends_with("report_2026-01-15.xlsx"));
        assert!(path.exists());
    }
}
