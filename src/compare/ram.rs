// src/compare/ram.rs
//
// RAM amounts in GB. Two entry points, deliberately asymmetric:
// - requirement text: first "<digits> GB" anywhere ("8 GB RAM", "16gb")
// - user input: the whole string must be digits ("16"); "16 GB" reads as 0

use std::sync::OnceLock;

use regex::Regex;

use crate::core::sanitize::is_ascii_digits;

fn gb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)([0-9]+)\s*gb").expect("static gb pattern"))
}

/// First integer followed by optional whitespace and "gb". `None` if there is none.
pub fn extract_ram_gb(text: &str) -> Option<u64> {
    let caps = gb_pattern().captures(text)?;
    let digits = caps.get(1)?.as_str();
    // Only overflow can fail here; such a number is "more than anyone has".
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Requirement-side amount; no "<n> GB" → 0.
pub fn requirement_ram_gb(text: &str) -> u64 {
    extract_ram_gb(text).unwrap_or(0)
}

/// User-side amount; anything but a plain digit string → 0.
pub fn user_ram_gb(input: &str) -> u64 {
    if is_ascii_digits(input) {
        input.parse::<u64>().unwrap_or(u64::MAX)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_text_forms() {
        assert_eq!(extract_ram_gb("8 GB RAM"), Some(8));
        assert_eq!(extract_ram_gb("16GB"), Some(16));
        assert_eq!(extract_ram_gb("at least 12 gb of memory, 16 GB better"), Some(12));
        assert_eq!(extract_ram_gb("4096 MB RAM"), None);
        assert_eq!(requirement_ram_gb("4096 MB RAM"), 0);
        assert_eq!(requirement_ram_gb(""), 0);
    }

    #[test]
    fn user_input_must_be_plain_digits() {
        assert_eq!(user_ram_gb("16"), 16);
        assert_eq!(user_ram_gb("16 GB"), 0);
        assert_eq!(user_ram_gb(" 16"), 0);
        assert_eq!(user_ram_gb(""), 0);
    }

    #[test]
    fn large_amounts_keep_their_order() {
        assert_eq!(user_ram_gb("5000000000"), 5_000_000_000);
        assert_eq!(requirement_ram_gb("6000000000 GB"), 6_000_000_000);
        assert!(user_ram_gb("5000000000") < requirement_ram_gb("6000000000 GB"));
        assert_eq!(user_ram_gb("99999999999999999999999"), u64::MAX);
    }
}
