//! Frontend application entry point.

// Application modules
mod app;
mod components;
mod config;
mod events;
mod logic;
mod pages;

use app::App;
use components::theme;
use config::{AppConfig, CliArgs};

fn main() {
    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", CliArgs::usage());
            std::process::exit(2);
        }
    };

    let (mut config, warnings) = AppConfig::load(args.config_path.as_deref());
    config.synthetic_camera |= args.synthetic_camera;

    let logger = match logging::Logger::with_component(
        config.log_path.clone(),
        config.log_level,
        "Frontend",
        false,
    ) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            std::process::exit(1);
        }
    };

    for warning in &warnings {
        logger.warn(&format!("[CONFIG] {}", warning));
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 640.0])
            .with_drag_and_drop(true)
            .with_title("AI Image Recognition"),
        ..Default::default()
    };

    let app_logger = logger.clone();
    if let Err(e) = eframe::run_native(
        "AI Image Recognition",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = theme::SURFACE;
            style.visuals.panel_fill = theme::BACKGROUND;
            style.visuals.selection.bg_fill = theme::ACCENT;
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new(cc, config, app_logger)))
        }),
    ) {
        logger.error(&format!("[APP] Event loop failed: {}", e));
        eprintln!("Failed to start the application: {}", e);
        std::process::exit(1);
    }
}
