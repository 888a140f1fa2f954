//! Live stream landing application entry point.

// Application modules
mod app;
mod components;
mod config;
mod events;
mod navigation;
mod pages;
mod theme;

use app::App;
use config::AppConfig;
use logging::Logger;

fn main() {
    let config = AppConfig::load();

    let logger = match Logger::new(&config.log_path, config.log_level) {
        Ok(logger) => logger
            .with_component("Frontend")
            .with_console_output(config.console_log),
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            std::process::exit(1);
        }
    };

    logger.info(&format!(
        "[APP] Logging to {} at level {}",
        config.log_path.display(),
        logger.level()
    ));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Live Stream Now"),
        ..Default::default()
    };

    let app_logger = logger.clone();
    let result = eframe::run_native(
        "Live Stream Now",
        native_options,
        Box::new(move |cc| {
            let app = App::new(&config, app_logger);

            cc.egui_ctx.set_theme(egui::Theme::Light);
            cc.egui_ctx.set_visuals(app.theme().visuals());

            Ok(Box::new(app))
        }),
    );

    if let Err(e) = result {
        logger.error(&format!("[APP] Window closed with error: {}", e));
        logger.shutdown();
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }

    logger.info("[APP] Window closed");
    logger.shutdown();
}
