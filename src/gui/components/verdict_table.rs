// src/gui/components/verdict_table.rs
//
// Overall verdict line plus one table row per axis.
// Purely a view over `app.advice`.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    compare::{messages, Tier},
    gui::app::App,
    report,
};

fn tier_color(tier: Tier) -> Color32 {
    match tier {
        Tier::Excellent => Color32::from_rgb(60, 170, 90),
        Tier::Good => Color32::from_rgb(210, 160, 40),
        Tier::Insufficient => Color32::from_rgb(200, 70, 60),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(advice) = &app.advice else {
        ui.weak("No verdict yet.");
        return;
    };
    let c = &advice.comparison;
    let lang = app.state.options.check.language;

    ui.label(
        RichText::new(messages::overall_message(lang, c.can_run_minimum, c.can_run_recommended))
            .heading()
            .color(tier_color(c.overall_tier())),
    );
    if let Some(size) = &advice.game.file_size {
        ui.label(format!("Install size: {size}"));
    }
    ui.add_space(4.0);

    let headers = report::comparison_headers();
    let rows = report::comparison_rows(c);
    let status_col = headers.len() - 2;

    TableBuilder::new(ui)
        .id_salt("verdict_table")
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().resizable(true).clip(true), headers.len() - 1)
        .column(Column::remainder().clip(true))
        .header(20.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for (row_cells, (_, detail)) in rows.iter().zip(c.axes()) {
                body.row(20.0, |mut row| {
                    for (ci, cell) in row_cells.iter().enumerate() {
                        row.col(|ui| {
                            if ci == status_col {
                                ui.label(RichText::new(cell).color(tier_color(detail.status)));
                            } else {
                                ui.label(cell);
                            }
                        });
                    }
                });
            }
        });
}
