use campaign_dashboard::gui::{DashboardApp, APP_TITLE};
use campaign_dashboard::logging;
use campaign_dashboard::settings::{Settings, SETTINGS_FILE};

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging, settings.log_file.as_ref().map(PathBuf::from));
    tracing::info!(dark_mode = settings.dark_mode, "starting dashboard");

    let (width, height) = settings.window_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| Box::new(DashboardApp::new(&cc.egui_ctx, settings))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))?;

    tracing::info!("dashboard closed");
    Ok(())
}
