// ==========================================
// Portal de Disponibilidad de Materiales - portal entry point
// ==========================================
// Presentation stage: loads the canonical CSV once and renders the four
// views as a plain text report (the interactive shell is a UI concern,
// outside this binary). Also writes the dated XLSX export.
// ==========================================

use material_portal::api::SearchRequest;
use material_portal::app::AppState;
use material_portal::config::PortalConfig;
use material_portal::logging;

fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", material_portal::APP_NAME);
    tracing::info!("version: {}", material_portal::VERSION);
    tracing::info!("==================================================");

    if let Err(e) = run() {
        tracing::error!("portal failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = PortalConfig::load()?;
    let state = AppState::load(&config.canonical_path)?;

    // Header metrics
    let metrics = state.metrics();
    println!("SKUs totales:          {}", metrics.total_skus);
    println!("Disponibilidad total:  {:.0}", metrics.total_available);
    println!("Categorias:            {}", metrics.category_count);
    println!("Agotados:              {}", metrics.depleted_count);
    println!("Stock bajo (<=10):     {}", metrics.low_stock_count);
    println!();

    // Summary view
    println!("SKUs por categoria:");
    for rollup in state.summary_api.category_rollup() {
        println!(
            "  {:<24} {:>6} SKUs  {:>10.0} disponibles",
            rollup.category, rollup.sku_count, rollup.total_available
        );
    }
    println!();

    println!("Distribucion de niveles de stock:");
    for bucket in state.summary_api.stock_level_distribution() {
        println!("  {:<10} {:>6}", bucket.level.to_string(), bucket.count);
    }
    println!();

    // Alert view at the default threshold
    let alerts = state.alert_api.alerts();
    println!(
        "Alertas (umbral {}): {} SKUs, {} agotados",
        alerts.threshold, alerts.at_or_below_count, alerts.depleted_count
    );
    for record in alerts.rows.iter().take(20) {
        println!(
            "  {:<16} {:<40} {:>6.0}",
            record.part_number, record.description, record.available
        );
    }
    println!();

    // Browse view row count (no filters)
    let browse = state.search_api.search(&SearchRequest::default());
    println!("Mostrando {} de {} SKUs", browse.matched, browse.total);

    // Export artifact next to the canonical file
    let today = chrono::Local::now().date_naive();
    let out_dir = config
        .canonical_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let artifact = state.export_api.export_to_dir(out_dir, today)?;
    tracing::info!("export written: {}", artifact.display());

    Ok(())
}
