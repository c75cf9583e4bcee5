// ==========================================
// Application layer - shared state
// ==========================================

pub mod state;

pub use state::{AppState, HeaderMetrics};
