// ==========================================
// Merge stage entry point
// ==========================================
// Batch job: SAP exports -> datos_disponibilidad.csv. Re-run after any
// failure; there is no retry logic.
// ==========================================

use material_portal::config::PortalConfig;
use material_portal::importer::run_merge;
use material_portal::logging;

fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("PROCESANDO DATOS DE SAP");
    tracing::info!("version: {}", material_portal::VERSION);
    tracing::info!("==================================================");

    let config = match PortalConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match run_merge(&config) {
        Ok(report) => {
            tracing::info!("==================================================");
            tracing::info!("DONE - {} SKUs processed", report.output_rows);
            tracing::info!("categories: {}", report.category_count);
            tracing::info!("total availability: {:.0} units", report.total_available);
            tracing::info!("depleted: {} SKUs", report.depleted_count);
            tracing::info!("low stock (<=10): {} SKUs", report.low_stock_count);
            tracing::info!("==================================================");
        }
        Err(e) => {
            tracing::error!("merge stage failed: {}", e);
            std::process::exit(1);
        }
    }
}
