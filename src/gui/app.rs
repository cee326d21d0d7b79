// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    advise::{Advice, GameRequirements},
    compare::UserHardware,
    config::state::AppState,
    specs::requirements::{self, ParsedRequirements},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "rigcheck",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // live preview of the two requirement boxes
    pub parsed_min: ParsedRequirements,
    pub parsed_rec: ParsedRequirements,

    // last verdict; cleared when any input changes
    pub advice: Option<Advice>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            parsed_min: ParsedRequirements::default(),
            parsed_rec: ParsedRequirements::default(),
            advice: None,
            status: s!("Idle"),
        };
        app.reparse();
        logf!("Init: language={:?}", app.state.options.check.language);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn user_hardware(&self) -> UserHardware {
        let g = &self.state.gui;
        UserHardware::new(g.cpu.trim(), g.gpu.trim(), g.ram.trim())
    }

    pub fn game_requirements(&self) -> GameRequirements {
        let mut game = GameRequirements {
            name: self.state.gui.game_name.clone(),
            minimum: self.parsed_min.clone(),
            recommended: self.parsed_rec.clone(),
            file_size: None,
        };
        game.file_size = game.minimum.storage.clone().or_else(|| game.recommended.storage.clone());
        game
    }

    /// Re-run the parser on both text boxes; invalidates the verdict.
    pub fn reparse(&mut self) {
        self.parsed_min = requirements::parse_str(&self.state.gui.minimum_text);
        self.parsed_rec = requirements::parse_str(&self.state.gui.recommended_text);
        self.advice = None;
    }

    /// Any hardware / language change makes the shown verdict stale.
    pub fn invalidate(&mut self) {
        if self.advice.take().is_some() {
            self.status("Inputs changed; press Check");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Ctrl+Enter runs the check
        if ctx.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command) {
            actions::check(self);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::left("hardware")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::hardware_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("central_scroll")
                .show(ui, |ui| {
                    components::requirements_editor::draw(ui, self);

                    ui.separator();

                    components::verdict_table::draw(ui, self);

                    ui.separator();

                    components::action_bar::draw(ui, self);
                });
        });
    }
}
