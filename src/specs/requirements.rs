// src/specs/requirements.rs
//
// Free-form requirement blocks → ParsedRequirements.
// "Processor: Intel i5-6600K, Memory: 8 GB RAM, Graphics: GTX 1060"

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::sanitize::flatten_line_breaks;

/// One field of a requirement block, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Cpu,
    Gpu,
    Ram,
    Storage,
    Os,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Cpu, Field::Gpu, Field::Ram, Field::Storage, Field::Os];

    /// Label synonyms, English and Portuguese. At equal start position the first listed wins.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Field::Cpu => &["processor", "cpu", "processador"],
            Field::Gpu => &["graphics", "video card", "gpu", "placa de vídeo", "video"],
            Field::Ram => &["memory", "ram", "memória"],
            Field::Storage => &[
                "storage", "hard drive", "space", "available space", "armazenamento", "espaço",
            ],
            Field::Os => &["os", "operating system", "sistema operacional", "so"],
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Field::Cpu => "cpu",
            Field::Gpu => "gpu",
            Field::Ram => "ram",
            Field::Storage => "storage",
            Field::Os => "os",
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::Cpu => 0,
            Field::Gpu => 1,
            Field::Ram => 2,
            Field::Storage => 3,
            Field::Os => 4,
        }
    }
}

/// Fields found in one requirement block. `None` = label not present.
/// Values are verbatim (trimmed) slices of the source; nothing is normalized here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedRequirements {
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub os: Option<String>,
}

impl ParsedRequirements {
    pub fn get(&self, field: Field) -> Option<&str> {
        let v = match field {
            Field::Cpu => &self.cpu,
            Field::Gpu => &self.gpu,
            Field::Ram => &self.ram,
            Field::Storage => &self.storage,
            Field::Os => &self.os,
        };
        v.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// (field, value) pairs for every field that was found.
    pub fn found(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().filter_map(|f| self.get(f).map(|v| (f, v)))
    }
}

/// Label, then ':', optional whitespace, then everything up to ',' / ';' / end.
fn field_patterns() -> &'static [Regex; 5] {
    static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
    PATTERNS.get_or_init(|| Field::ALL.map(|f| build_pattern(f.labels())))
}

fn build_pattern(labels: &[&str]) -> Regex {
    let alts = labels
        .iter()
        .map(|l| regex::escape(l))
        .collect::<Vec<_>>()
        .join("|");
    // Labels are fixed literals; the pattern can only fail on a programming error.
    Regex::new(&format!(r"(?i)(?:{alts}):\s*([^,;]+)")).expect("static label pattern")
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    let value = caps.get(1)?.as_str().trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Extract one field. Leftmost label occurrence wins.
pub fn extract(text: &str, field: Field) -> Option<String> {
    capture(&field_patterns()[field.index()], &flatten_line_breaks(text))
}

/// Parse a requirement block. Absent or empty text yields an all-`None` record.
pub fn parse(text: Option<&str>) -> ParsedRequirements {
    match text {
        Some(t) => parse_str(t),
        None => ParsedRequirements::default(),
    }
}

pub fn parse_str(text: &str) -> ParsedRequirements {
    if text.is_empty() {
        return ParsedRequirements::default();
    }

    let line = flatten_line_breaks(text);
    let [cpu, gpu, ram, storage, os] = field_patterns();

    ParsedRequirements {
        cpu: capture(cpu, &line),
        gpu: capture(gpu, &line),
        ram: capture(ram, &line),
        storage: capture(storage, &line),
        os: capture(os, &line),
    }
}
