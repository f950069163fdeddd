#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use freehand_canvas::{CanvasApp, CanvasConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::from_env().unwrap_or_else(|err| {
        log::warn!("{err}; using default settings");
        CanvasConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("canvas"),
        multisampling: 4,
        ..Default::default()
    };

    eframe::run_native(
        "canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(CanvasApp::new(cc, config)))),
    )
}
