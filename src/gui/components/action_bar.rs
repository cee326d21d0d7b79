// src/gui/components/action_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let has_verdict = app.advice.is_some();

    ui.horizontal(|ui| {
        if ui.add_enabled(has_verdict, egui::Button::new("Copy JSON")).clicked() {
            actions::copy_json(app, &ctx);
        }
        if ui.add_enabled(has_verdict, egui::Button::new("Copy TSV")).clicked() {
            actions::copy_tsv(app, &ctx);
        }
    });
}
