// ==========================================
// API layer - portal views
// ==========================================
// Four read-only views over the canonical table: search/browse,
// aggregate summary, low-stock alerts, spreadsheet export. Every call is
// a pure synchronous function of the loaded records.
// ==========================================

pub mod alert_api;
pub mod error;
pub mod export_api;
pub mod search_api;
pub mod summary_api;

pub use alert_api::{AlertApi, AlertResponse};
pub use error::{ApiError, ApiResult};
pub use export_api::ExportApi;
pub use search_api::{SearchApi, SearchRequest, SearchResponse, SortKey};
pub use summary_api::{CategoryRollup, StockLevelCount, SummaryApi, TopSku};
