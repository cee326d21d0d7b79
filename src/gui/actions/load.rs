// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{advise, file::normalize_separators, gui::app::App};

/// Fill both requirement boxes from the game document at `game_path`.
pub fn load_game(app: &mut App) {
    let raw = app.state.gui.game_path.trim();
    if raw.is_empty() {
        app.status("Enter a game JSON path first");
        return;
    }
    let path = PathBuf::from(normalize_separators(raw));

    match advise::load_game_document(&path) {
        Ok(doc) => {
            let pc = doc.pc_requirements();
            let gui = &mut app.state.gui;
            gui.minimum_text = pc.minimum.unwrap_or_default();
            gui.recommended_text = pc.recommended.unwrap_or_default();
            gui.game_name = doc.name.clone();

            let msg = match (&doc.name, gui.minimum_text.is_empty() && gui.recommended_text.is_empty()) {
                (_, true) => format!("No PC requirements in {}", path.display()),
                (Some(name), false) => format!("Loaded {name}"),
                (None, false) => format!("Loaded {}", path.display()),
            };
            logf!("Load: {} (platforms={:?})", path.display(), doc.platform_slugs());
            app.reparse();
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: {}", e);
            app.status(format!("Load failed: {e}"));
        }
    }
}
