// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    config::options::{OutputFormat, OutputOptions},
    gui::app::App,
    report,
};

fn copy_as(app: &mut App, ui_ctx: &egui::Context, format: OutputFormat) {
    let Some(advice) = &app.advice else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no verdict yet");
        return;
    };

    let opts = OutputOptions {
        format,
        include_headers: true,
        pretty: true,
        out_path: None,
    };
    let lang = app.state.options.check.language;

    match report::render_advice(advice, lang, &opts) {
        Ok(txt) => {
            logf!("Copy: format={:?}, bytes={}", format, txt.len());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: render failed: {}", e);
            app.status(format!("Copy failed: {e}"));
        }
    }
}

pub fn copy_json(app: &mut App, ui_ctx: &egui::Context) {
    copy_as(app, ui_ctx, OutputFormat::Json);
}

pub fn copy_tsv(app: &mut App, ui_ctx: &egui::Context) {
    copy_as(app, ui_ctx, OutputFormat::Tsv);
}
