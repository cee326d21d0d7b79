// src/compare/normalize.rs
//
// Hardware name → lookup key.
// lower-case, drop vendor/category noise words (whole words only), collapse spaces.

use std::sync::OnceLock;

use regex::Regex;

use super::ranking::{RankingTable, CPU_RANKINGS, GPU_RANKINGS};
use crate::config::consts::NO_HARDWARE_SCORE;
use crate::core::sanitize::normalize_ws;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HardwareKind {
    Cpu,
    Gpu,
}

impl HardwareKind {
    pub fn noise_words(&self) -> &'static [&'static str] {
        match self {
            HardwareKind::Gpu => &["nvidia", "amd", "intel", "geforce", "radeon", "graphics"],
            HardwareKind::Cpu => &["intel", "amd", "core", "processor", "cpu"],
        }
    }

    pub fn table(&self) -> &'static RankingTable {
        match self {
            HardwareKind::Cpu => &CPU_RANKINGS,
            HardwareKind::Gpu => &GPU_RANKINGS,
        }
    }

    fn noise_pattern(&self) -> &'static Regex {
        static GPU: OnceLock<Regex> = OnceLock::new();
        static CPU: OnceLock<Regex> = OnceLock::new();
        let cell = match self {
            HardwareKind::Gpu => &GPU,
            HardwareKind::Cpu => &CPU,
        };
        cell.get_or_init(|| {
            let words = self.noise_words().join("|");
            Regex::new(&format!(r"\b(?:{words})\b")).expect("static noise-word pattern")
        })
    }

    /// "NVIDIA GeForce  RTX 3060" → "rtx 3060"
    pub fn normalize(&self, name: &str) -> String {
        let lower = name.to_lowercase();
        let stripped = self.noise_pattern().replace_all(&lower, "");
        normalize_ws(&stripped)
    }

    /// Normalize, then score against this kind's table.
    pub fn score(&self, name: &str) -> u32 {
        self.table().score(&self.normalize(name))
    }

    /// Score for what the user typed. Blank input means "no hardware given".
    pub fn user_score(&self, name: &str) -> u32 {
        if name.is_empty() { NO_HARDWARE_SCORE } else { self.score(name) }
    }

    /// The table key a name resolves to, if any.
    pub fn matched_key(&self, name: &str) -> Option<&'static str> {
        self.table().lookup(&self.normalize(name)).map(|(k, _)| k)
    }
}

pub fn normalize_gpu_name(name: &str) -> String {
    HardwareKind::Gpu.normalize(name)
}

pub fn normalize_cpu_name(name: &str) -> String {
    HardwareKind::Cpu.normalize(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::FLOOR_SCORE;

    #[test]
    fn gpu_noise_is_removed() {
        assert_eq!(normalize_gpu_name("NVIDIA GeForce RTX 3060"), "rtx 3060");
        assert_eq!(normalize_gpu_name("AMD Radeon RX 6600 XT"), "rx 6600 xt");
        assert_eq!(normalize_gpu_name("Intel Arc A770 Graphics"), "arc a770");
    }

    #[test]
    fn cpu_noise_is_removed() {
        assert_eq!(normalize_cpu_name("Intel Core i5-6600K"), "i5-6600k");
        assert_eq!(normalize_cpu_name("AMD Ryzen 5 3600 Processor"), "ryzen 5 3600");
        assert_eq!(normalize_cpu_name("  CPU:   i7-8700K "), ": i7-8700k");
    }

    #[test]
    fn only_whole_words_are_removed() {
        // "cores" and "amdahl" are not noise words.
        assert_eq!(normalize_cpu_name("8 Cores"), "8 cores");
        assert_eq!(normalize_gpu_name("Amdahl 9000"), "amdahl 9000");
    }

    #[test]
    fn scoring_ignores_case_spacing_and_noise() {
        assert_eq!(HardwareKind::Cpu.score("Intel Core i5-6600K"), HardwareKind::Cpu.score("i5-6600k"));
        assert_eq!(HardwareKind::Cpu.score("i5-6600k"), 350);
        assert_eq!(HardwareKind::Gpu.score("nvidia   GEFORCE rtx 3070"), 750);
    }

    #[test]
    fn unknown_and_blank_names() {
        assert_eq!(HardwareKind::Gpu.score("Matrox Millennium"), FLOOR_SCORE);
        assert_eq!(HardwareKind::Gpu.user_score(""), 0);
        assert_eq!(HardwareKind::Gpu.user_score("Matrox Millennium"), FLOOR_SCORE);
    }

    #[test]
    fn matched_key_explains_a_score() {
        assert_eq!(HardwareKind::Gpu.matched_key("GeForce RTX 3060 Ti 8GB"), Some("rtx 3060 ti"));
        assert_eq!(HardwareKind::Cpu.matched_key("Pentium G4560"), None);
    }
}
