// src/config/state.rs
use super::{consts::{WINDOW_H, WINDOW_W}, options::AppOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Left panel inputs, verbatim
    pub cpu: String,
    pub gpu: String,
    pub ram: String,

    /// Requirement blocks as typed or loaded from a game document
    pub minimum_text: String,
    pub recommended_text: String,

    /// Game JSON path field + name of the last loaded game
    pub game_path: String,
    pub game_name: Option<String>,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            cpu: s!(),
            gpu: s!(),
            ram: s!(),
            minimum_text: s!(),
            recommended_text: s!(),
            game_path: s!(),
            game_name: None,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
