// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub check: CheckOptions,
    pub output: OutputOptions,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self { Language::Portuguese => "pt", Language::English => "en" }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => Some(Language::Portuguese),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub language: Language,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            "tsv" => Some(OutputFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
    pub pretty: bool,
    /// None → stdout (CLI) / clipboard (GUI)
    pub out_path: Option<PathBuf>,
}

impl OutputOptions {
    /// Resolve `out_path` into a concrete file path.
    /// A directory hint (existing dir or trailing separator) gets `<DEFAULT_FILE>.<ext>`.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let p = self.out_path.as_ref()?;
        if p.is_dir() || looks_like_dir_hint(p) {
            Some(p.join(join!(DEFAULT_FILE, ".", self.format.ext())))
        } else {
            Some(p.clone())
        }
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::Portuguese, Language::English] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("klingon"), None);
    }

    #[test]
    fn dir_hint_gets_default_file_name() {
        let opts = OutputOptions {
            format: OutputFormat::Json,
            out_path: Some(PathBuf::from("reports/")),
            ..OutputOptions::default()
        };
        let p = opts.resolved_path().unwrap();
        assert!(p.to_string_lossy().ends_with("verdict.json"));
    }

    #[test]
    fn explicit_file_is_kept() {
        let opts = OutputOptions {
            format: OutputFormat::Csv,
            out_path: Some(PathBuf::from("reports/mine.txt")),
            ..OutputOptions::default()
        };
        assert_eq!(opts.resolved_path(), Some(PathBuf::from("reports/mine.txt")));
        assert_eq!(OutputOptions::default().resolved_path(), None);
    }
}
