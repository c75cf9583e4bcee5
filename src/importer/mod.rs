// ==========================================
// Importer layer - merge stage
// ==========================================
// Stage 0: file reading and parsing (file_parser)
// Stage 1: cleaning and normalization (data_cleaner, field_mapper)
// Stage 2: join, sort, persist (merge, pipeline)
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod merge;
pub mod pipeline;

pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{ColumnDetection, FieldMapper};
pub use file_parser::{ExcelParser, RawTable, Utf16TabParser};
pub use merge::MergeEngine;
pub use pipeline::{run_merge, MergeReport};
