// src/gui/components/mod.rs
pub mod action_bar;
pub mod hardware_panel;
pub mod requirements_editor;
pub mod verdict_table;
