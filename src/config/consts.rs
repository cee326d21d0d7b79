// src/config/consts.rs

// Scoring
pub const FLOOR_SCORE: u32 = 200; // any name missing from the ranking tables
pub const NO_HARDWARE_SCORE: u32 = 0; // user left the field blank

// Provider documents
pub const PC_PLATFORM_SLUG: &str = "pc";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";

// Output
pub const DEFAULT_FILE: &str = "verdict";

// GUI
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 720.0;
