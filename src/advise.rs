// src/advise.rs
//
// Thin orchestration: game document → PC requirement texts → parsed fields
// → comparison. The only layer that touches files; the core stays pure.

use std::{error::Error, fs, path::Path};

use serde::Serialize;
use serde_json::Value;

use crate::{
    compare::{ComparisonResult, HardwareComparator, UserHardware},
    config::options::CheckOptions,
    specs::{platforms::GameDocument, requirements::{self, ParsedRequirements}},
};

/// Parsed requirement tiers for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameRequirements {
    pub name: Option<String>,
    pub minimum: ParsedRequirements,
    pub recommended: ParsedRequirements,
    /// Install size: minimum storage, else recommended storage.
    pub file_size: Option<String>,
}

impl GameRequirements {
    pub fn from_texts(minimum: Option<&str>, recommended: Option<&str>) -> Self {
        let minimum = requirements::parse(minimum);
        let recommended = requirements::parse(recommended);
        let file_size = minimum.storage.clone().or_else(|| recommended.storage.clone());
        Self { name: None, minimum, recommended, file_size }
    }

    pub fn from_document(doc: &GameDocument) -> Self {
        let pc = doc.pc_requirements();
        let mut game = Self::from_texts(pc.minimum.as_deref(), pc.recommended.as_deref());
        game.name = doc.name.clone();
        game
    }

    pub fn from_game_json(doc: &Value) -> Result<Self, Box<dyn Error>> {
        let doc = GameDocument::from_value(doc)?;
        Ok(Self::from_document(&doc))
    }

    pub fn has_any_requirement(&self) -> bool {
        !(self.minimum.is_empty() && self.recommended.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub game: GameRequirements,
    pub comparison: ComparisonResult,
}

pub fn advise(user: &UserHardware, game: &GameRequirements, opts: &CheckOptions) -> Advice {
    let comparison = HardwareComparator::new(opts.language)
        .compare(user, &game.minimum, &game.recommended);
    Advice { game: game.clone(), comparison }
}

/// Read a provider game document (JSON) from disk.
pub fn load_game_document(path: &Path) -> Result<GameDocument, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let doc = GameDocument::from_json(&text)
        .map_err(|e| format!("Not a game document {}: {}", path.display(), e))?;
    Ok(doc)
}

/// Game document from disk, parsed into requirement tiers.
pub fn load_game_file(path: &Path) -> Result<GameRequirements, Box<dyn Error>> {
    let doc = load_game_document(path)?;

    let game = GameRequirements::from_document(&doc);
    logf!(
        "Game: loaded {:?} from {} (platforms={:?}, min_fields={}, rec_fields={})",
        game.name,
        path.display(),
        doc.platform_slugs(),
        game.minimum.found().count(),
        game.recommended.found().count()
    );
    if !game.has_any_requirement() {
        logd!("Game: no PC requirements in {}", path.display());
    }
    Ok(game)
}

/// Requirement text from a file; the whole file is one block.
pub fn load_text_file(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Tier;

    #[test]
    fn file_size_prefers_minimum_storage() {
        let g = GameRequirements::from_texts(
            Some("Storage: 50 GB available space"),
            Some("Storage: 60 GB SSD"),
        );
        assert_eq!(g.file_size.as_deref(), Some("50 GB available space"));

        let g = GameRequirements::from_texts(Some("Memory: 8 GB"), Some("Storage: 60 GB SSD"));
        assert_eq!(g.file_size.as_deref(), Some("60 GB SSD"));

        assert_eq!(GameRequirements::from_texts(None, None).file_size, None);
    }

    #[test]
    fn game_json_without_pc_block_has_no_requirements() {
        let doc = serde_json::json!({
            "name": "Console Exclusive",
            "platforms": [{ "platform": { "slug": "playstation5" }, "requirements": {} }]
        });
        let g = GameRequirements::from_game_json(&doc).unwrap();
        assert_eq!(g.name.as_deref(), Some("Console Exclusive"));
        assert!(!g.has_any_requirement());

        let advice = advise(&UserHardware::default(), &g, &CheckOptions::default());
        assert!(advice.comparison.can_run_recommended);
    }

    #[test]
    fn advise_uses_both_tiers() {
        let g = GameRequirements::from_texts(
            Some("Processor: i5-8400, Memory: 8 GB RAM, Graphics: GTX 1060"),
            Some("Processor: i7-9700K, Memory: 16 GB RAM, Graphics: RTX 2070"),
        );
        let user = UserHardware::new("Intel Core i7-8700K", "GeForce GTX 1080", "16");
        let a = advise(&user, &g, &CheckOptions::default());
        assert_eq!(a.comparison.details.cpu.status, Tier::Good);
        assert_eq!(a.comparison.details.gpu.status, Tier::Excellent);
        assert_eq!(a.comparison.details.ram.status, Tier::Excellent);
        assert!(a.comparison.can_run_minimum);
        assert!(!a.comparison.can_run_recommended);
    }
}
