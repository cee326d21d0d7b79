// src/specs/mod.rs
//! # Reading “specs” module
//!
//! This module hosts the **input-specific reading specifications**. Each spec
//! focuses on one kind of input and encodes *where the ground truth lives* and
//! *how to extract it tolerantly*.
//!
//! ## What lives here
//! - **Requirement text parsing** (`requirements`): label + colon + delimiter
//!   scanning over free-form blocks such as
//!   `"Processor: Intel i5-6600K, Memory: 8 GB RAM, Graphics: GTX 1060"`.
//! - **Provider document reading** (`platforms`): locate the PC entry in a game
//!   document and return its raw `minimum` / `recommended` texts.
//!
//! ## What does **not** live here
//! - **Name normalization or scoring** – the comparator does that, lazily.
//! - **Fetching, caching, presentation** – higher layers (`advise`, CLI, GUI).
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → advise::GameRequirements::from_game_json
//!               → specs::platforms::GameDocument::pc_requirements
//!               → specs::requirements::parse (minimum, recommended)
//!           → compare::compare
//! ```
//!
//! ## Conventions & invariants
//! - **Case-insensitive** label detection; the body text is kept verbatim.
//! - Absence is `None`, never an empty string, and never an error.
//! - Fields are scanned independently over the whole text; the leftmost label wins.
pub mod platforms;
pub mod requirements;

pub use platforms::{GameDocument, PlatformRequirements};
pub use requirements::{parse, parse_str, Field, ParsedRequirements};
