mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use lookout_core::config::AppConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AppConfig::default_path()
        .map(|path| AppConfig::load_or_default(&path))
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Lookout"),
        ..Default::default()
    };

    eframe::run_native(
        "Lookout",
        options,
        Box::new(move |cc| Ok(Box::new(app::LookoutApp::new(&cc.egui_ctx, config)))),
    )
}
