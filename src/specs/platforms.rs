// src/specs/platforms.rs
//! Reading *spec* for provider game documents.
//!
//! Purpose:
//! - Deserialize the parts of a game-detail document we care about: `name` and the
//!   `platforms[]` list, where each entry carries `platform.slug` and an optional
//!   `requirements { minimum, recommended }` block of free text.
//! - Pick the **PC** entry (`platform.slug == "pc"`) and hand back its raw texts.
//!
//! Non-Responsibilities:
//! - **No fetching.** The document arrives as a string or an already-parsed `Value`.
//! - **No parsing of the requirement text itself**; that is `specs::requirements`.
//!
//! Every field is optional on the wire. Missing or `null` pieces read as "absent".

use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::PC_PLATFORM_SLUG;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PlatformRequirements {
    #[serde(default)]
    pub minimum: Option<String>,
    #[serde(default)]
    pub recommended: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct PlatformRef {
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct PlatformEntry {
    #[serde(default)]
    platform: Option<PlatformRef>,
    #[serde(default)]
    requirements: Option<PlatformRequirements>,
}

impl PlatformEntry {
    fn slug(&self) -> Option<&str> {
        self.platform.as_ref()?.slug.as_deref()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    platforms: Option<Vec<PlatformEntry>>,
}

impl GameDocument {
    pub fn from_value(doc: &Value) -> Result<GameDocument, serde_json::Error> {
        GameDocument::deserialize(doc)
    }

    pub fn from_json(text: &str) -> Result<GameDocument, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Requirement texts for the PC platform; first matching entry wins.
    /// No PC entry (or no requirements on it) → empty block.
    pub fn pc_requirements(&self) -> PlatformRequirements {
        self.platforms
            .iter()
            .flatten()
            .find(|p| p.slug() == Some(PC_PLATFORM_SLUG))
            .and_then(|p| p.requirements.clone())
            .unwrap_or_default()
    }

    pub fn platform_slugs(&self) -> Vec<String> {
        self.platforms
            .iter()
            .flatten()
            .filter_map(|p| p.slug().map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "id": 3498,
        "name": "Grand Theft Auto V",
        "platforms": [
            { "platform": { "id": 187, "slug": "playstation5" }, "requirements": {} },
            { "platform": { "id": 4, "slug": "pc" },
              "requirements": {
                "minimum": "Minimum:OS: Windows 10 64 Bit, Processor: Intel Core 2 Quad CPU Q6600",
                "recommended": "Recommended:Memory: 8 GB, Graphics: GTX 660 2GB"
              } }
        ]
    }"#;

    #[test]
    fn finds_the_pc_block() {
        let doc = GameDocument::from_json(DOC).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Grand Theft Auto V"));
        let req = doc.pc_requirements();
        assert!(req.minimum.unwrap().starts_with("Minimum:OS"));
        assert!(req.recommended.unwrap().contains("GTX 660"));
        assert_eq!(doc.platform_slugs(), vec!["playstation5", "pc"]);
    }

    #[test]
    fn missing_pieces_read_as_absent() {
        for text in [
            r#"{}"#,
            r#"{"platforms": null}"#,
            r#"{"platforms": [{"platform": {"slug": "xbox-one"}}]}"#,
            r#"{"platforms": [{"platform": {"slug": "pc"}, "requirements": null}]}"#,
            r#"{"platforms": [{"platform": null}]}"#,
        ] {
            let doc = GameDocument::from_json(text).unwrap();
            assert_eq!(doc.pc_requirements(), PlatformRequirements::default(), "{text}");
        }
    }

    #[test]
    fn from_value_matches_from_json() {
        let v: Value = serde_json::from_str(DOC).unwrap();
        let a = GameDocument::from_value(&v).unwrap().pc_requirements();
        let b = GameDocument::from_json(DOC).unwrap().pc_requirements();
        assert_eq!(a, b);
    }
}
