// src/gui/components/requirements_editor.rs
//
// Game JSON loader, the two requirement text boxes, and a preview grid of
// what the parser pulled out of them.

use eframe::egui;

use crate::{
    core::sanitize::ellipsize,
    gui::{actions, app::App},
    report,
};

const PREVIEW_MAX: usize = 60;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Game JSON:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.game_path)
                .hint_text("path/to/game.json")
                .desired_width(360.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            actions::load_game(app);
        }
        if let Some(name) = &app.state.gui.game_name {
            ui.strong(name);
        }
    });

    ui.add_space(4.0);

    let mut changed = false;
    ui.columns(2, |cols| {
        cols[0].label("Minimum");
        changed |= cols[0]
            .add(
                egui::TextEdit::multiline(&mut app.state.gui.minimum_text)
                    .hint_text("Processor: i5-8400, Memory: 8 GB RAM, Graphics: GTX 1060")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            )
            .changed();

        cols[1].label("Recommended");
        changed |= cols[1]
            .add(
                egui::TextEdit::multiline(&mut app.state.gui.recommended_text)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            )
            .changed();
    });
    if changed {
        app.reparse();
    }

    ui.add_space(4.0);

    let headers = report::requirements_headers();
    let rows = report::requirements_rows(&app.parsed_min, &app.parsed_rec);

    egui::Grid::new("parsed_preview")
        .striped(true)
        .num_columns(headers.len())
        .show(ui, |ui| {
            for h in &headers {
                ui.strong(h);
            }
            ui.end_row();

            for row in &rows {
                for cell in row {
                    if cell.is_empty() {
                        ui.weak("-");
                    } else {
                        ui.label(ellipsize(cell, PREVIEW_MAX));
                    }
                }
                ui.end_row();
            }
        });
}
