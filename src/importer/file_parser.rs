// ==========================================
// File parsers - stage 0: reading and parsing
// ==========================================
// Supported: UTF-16LE tab-delimited SAP text exports / Excel (.xlsx/.xls)
// Malformed individual lines are skipped; unreadable files are fatal.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use encoding_rs::UTF_16LE;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawTable - parsed but uncleaned tabular data
// ==========================================
// Headers keep their file order (needed for positional column fallback);
// rows are keyed by trimmed header name.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    /// Whether a trimmed header with this exact name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

// ==========================================
// Utf16TabParser - SAP text export parser
// ==========================================
// SAP "Export to file" produces UTF-16LE with a BOM and tab separators.
pub struct Utf16TabParser;

impl Utf16TabParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;

        // BOM-sniffing decode; stray U+FEFF may still survive inside the
        // stream on re-exported files, so strip it everywhere.
        let (decoded, _, _) = UTF_16LE.decode(&bytes);
        let decoded = decoded.replace('\u{feff}', "");

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(decoded.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ImportError::CsvParseError(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    // Best-effort parse: skip the malformed line and continue
                    tracing::debug!("skipping malformed line {}: {}", row_idx + 2, e);
                    continue;
                }
            };

            let mut row_map = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // Skip fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// ExcelParser - category dictionary parser
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // Windows exports often carry upper-case extensions
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("xlsx") && !ext.eq_ignore_ascii_case("xls") {
            return Err(ImportError::UnsupportedFormat(ext.to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // First sheet only
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "workbook has no sheets".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no data rows".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row_map = HashMap::new();
            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Encode text as UTF-16LE with a leading BOM, the SAP export shape.
    fn write_utf16le(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        let mut bytes: Vec<u8> = vec![0xFF, 0xFE];
        for unit in content.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        temp_file.write_all(&bytes).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_utf16_parser_valid_file() {
        let temp_file = write_utf16le(
            "Item No.\tItem Description\tAvailable\n\
             01100342\tRODAMIENTO 6205\t20\n\
             01100343\tBALERO AXIAL\t3\n",
        );

        let table = Utf16TabParser.parse(temp_file.path()).unwrap();
        assert_eq!(table.headers, vec!["Item No.", "Item Description", "Available"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0].get("Item Description"),
            Some(&"RODAMIENTO 6205".to_string())
        );
    }

    #[test]
    fn test_utf16_parser_strips_bom_from_first_header() {
        let temp_file = write_utf16le("Item No.\tAvailable\nA1\t5\n");
        let table = Utf16TabParser.parse(temp_file.path()).unwrap();
        assert_eq!(table.headers[0], "Item No.");
        assert!(table.has_column("Item No."));
    }

    #[test]
    fn test_utf16_parser_skips_blank_rows() {
        let temp_file = write_utf16le("Item No.\tAvailable\nA1\t5\n\t\nA2\t7\n");
        let table = Utf16TabParser.parse(temp_file.path()).unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_utf16_parser_preserves_non_ascii() {
        let temp_file = write_utf16le("Item No.\tItem Description\nA1\tTORNILLO 3/8\u{201d} ACUÑADO\n");
        let table = Utf16TabParser.parse(temp_file.path()).unwrap();
        assert!(table.rows[0]
            .get("Item Description")
            .unwrap()
            .contains("ACUÑADO"));
    }

    #[test]
    fn test_utf16_parser_file_not_found() {
        let result = Utf16TabParser.parse(Path::new("missing_export.txt"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_excel_parser_accepts_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DICCIONARIO.XLSX");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Part ID").unwrap();
        worksheet.write_string(0, 1, "Categoria").unwrap();
        worksheet.write_string(1, 0, "001").unwrap();
        worksheet.write_string(1, 1, "RODAMIENTOS").unwrap();
        workbook.save(&path).unwrap();

        let table = ExcelParser.parse(&path).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].get("Categoria"), Some(&"RODAMIENTOS".to_string()));
    }

    #[test]
    fn test_excel_parser_rejects_unknown_extension() {
        let temp_file = NamedTempFile::with_suffix(".txt").unwrap();
        let result = ExcelParser.parse(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
