// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use rigcheck::{config::state::GuiState, gui, log, loge};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();

    let initial = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([initial.window_w, initial.window_h])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
