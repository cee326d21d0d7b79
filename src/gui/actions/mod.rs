// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{check,copy_*,load_game}.

mod check;  // src/gui/actions/check.rs
mod copy;   // src/gui/actions/copy.rs
mod load;   // src/gui/actions/load.rs

pub use check::check;
pub use copy::{copy_json, copy_tsv};
pub use load::load_game;
