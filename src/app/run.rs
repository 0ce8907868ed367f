use crate::app::SiemAtlasApp;
use crate::config::AppConfig;
use crate::fetch::FetchRuntime;
use eframe::egui;

pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load();
    let rt = FetchRuntime::new()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SIEM Atlas")
            .with_inner_size([config.ui.window_width, config.ui.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "SIEM Atlas",
        native_options,
        Box::new(move |cc| Box::new(SiemAtlasApp::new(cc, config, rt))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
