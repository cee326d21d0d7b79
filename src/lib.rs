// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;
pub mod compare;

pub mod advise;
pub mod csv;
pub mod report;
pub mod file;
pub mod cli;
pub mod gui;
