//! TradeBuilt - HVAC field calculators
//!
//! Splash, main menu, calculator list and the Delta-T calculator.

mod app;
mod catalog;
mod config;
mod delta_t;
mod info;
mod nav;
mod screens;
mod splash;

use app::TradeBuiltApp;
use config::{AppConfig, ConfigSource};
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    tradecore::logging::init_logging();

    let (config, source) = AppConfig::load();
    match &source {
        ConfigSource::Defaults => tracing::info!("using built-in calculator catalog"),
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "loaded config"),
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title("TradeBuilt"),
        ..Default::default()
    };

    eframe::run_native(
        "TradeBuilt",
        options,
        Box::new(|cc| {
            tradecore::TradeTheme::default().apply(&cc.egui_ctx);
            Box::new(TradeBuiltApp::new(cc, config, source))
        }),
    )
}
