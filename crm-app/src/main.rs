pub mod error;
pub mod logger;

use std::error::Error;

use crm_panel::{NotificationKind, Notifier, PipelineController};
use crm_service::{CrmDataset, CrmService, FaultInjector, LatencyProfile};
use log::{info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = crm_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = crm_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting crm-app v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Build the mock backend from config
    let service = CrmService::new(
        CrmDataset::seeded(),
        LatencyProfile::from_millis(config.service.latency_ms),
        FaultInjector::new(config.service.rejection_rate),
    );

    let (notifier, notifications) = Notifier::channel();
    let mut pipeline = PipelineController::new(service.clone(), notifier);

    pipeline.load().await?;
    log_board(&pipeline);

    // Headless walkthrough: drag the first qualified deal into won
    if let Some(deal) = pipeline.board().deals_in("qualified").first().cloned() {
        info!("Dragging deal {} ({}) onto won", deal.id, deal.title);
        pipeline.begin_deal_drag(deal);
        pipeline.drag_over("won");

        match pipeline.drop_on("won").await {
            Ok(outcome) => info!("Drop outcome: {outcome:?}"),
            Err(e) => warn!("Drop failed: {e}"),
        }
    }

    log_board(&pipeline);

    let metrics = service.fetch_dashboard_metrics().await?;
    info!(
        "Dashboard: {} leads, {} active deals, {}% conversion, {} open tickets",
        metrics.lead_count, metrics.active_deals, metrics.conversion_rate, metrics.open_tickets
    );

    let totals = service.fetch_report_totals().await?;
    info!(
        "Reports: marketing-return {}/{:.2}, won {}/{:.2}, lost {}/{:.2}",
        totals.marketing_return.count,
        totals.marketing_return.total_value,
        totals.won.count,
        totals.won.total_value,
        totals.lost.count,
        totals.lost.total_value,
    );

    drain_notifications(notifications);

    info!("Walkthrough complete");
    Ok(())
}

fn log_board(pipeline: &PipelineController) {
    for stage in pipeline.board().list_stages() {
        let deals = pipeline.board().deals_in(&stage.id);
        info!(
            "  [{}] {} - {} deals, R$ {:.2}",
            if stage.locked { "locked" } else { "open" },
            stage.title,
            deals.len(),
            pipeline.board().stage_total(&stage.id),
        );
    }
}

fn drain_notifications(mut notifications: UnboundedReceiver<crm_panel::Notification>) {
    while let Ok(notification) = notifications.try_recv() {
        match notification.kind {
            NotificationKind::Success => info!("Toast: {}", notification.message),
            NotificationKind::Error => warn!("Toast: {}", notification.message),
        }
    }
}
