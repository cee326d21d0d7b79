// src/gui/components/hardware_panel.rs
//
// Left panel: the user's CPU/GPU/RAM, language, and the Check button.
// Edits invalidate the current verdict; the matched ranking key shows live.

use eframe::egui::{self, RichText};

use crate::{
    compare::HardwareKind,
    config::options::Language,
    gui::{actions, app::App},
};

fn match_hint(ui: &mut egui::Ui, kind: HardwareKind, input: &str) {
    let text = match kind.matched_key(input) {
        Some(key) => format!("→ {key} ({})", kind.user_score(input)),
        None if input.trim().is_empty() => return,
        None => format!("→ unranked ({})", kind.user_score(input)),
    };
    ui.label(RichText::new(text).small().weak());
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Your PC");
    ui.add_space(4.0);

    let mut changed = false;
    {
        let gui = &mut app.state.gui;

        ui.label("Processor");
        changed |= ui
            .add(egui::TextEdit::singleline(&mut gui.cpu).hint_text("Ryzen 5 5600"))
            .changed();
        match_hint(ui, HardwareKind::Cpu, &gui.cpu);

        ui.label("Graphics card");
        changed |= ui
            .add(egui::TextEdit::singleline(&mut gui.gpu).hint_text("RTX 3060"))
            .changed();
        match_hint(ui, HardwareKind::Gpu, &gui.gpu);

        ui.label("Memory (GB)");
        changed |= ui
            .add(egui::TextEdit::singleline(&mut gui.ram).hint_text("16"))
            .changed();
    }

    ui.separator();

    let lang = &mut app.state.options.check.language;
    let before = *lang;
    ui.horizontal(|ui| {
        ui.label("Messages:");
        ui.selectable_value(lang, Language::Portuguese, "PT");
        ui.selectable_value(lang, Language::English, "EN");
    });
    if *lang != before {
        logf!("UI: Language → {:?}", lang);
        changed = true;
    }

    if changed {
        app.invalidate();
    }

    ui.add_space(8.0);
    if ui.button("Check").clicked() {
        actions::check(app);
    }
}
