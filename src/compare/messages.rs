// src/compare/messages.rs
use super::verdict::{Axis, Tier};
use crate::config::options::Language;

/// Human-readable line for one axis. `subject` is what the user has
/// (raw CPU/GPU text, or "N GB" for RAM).
pub fn axis_message(lang: Language, axis: Axis, tier: Tier, subject: &str) -> String {
    match lang {
        Language::Portuguese => {
            let who = match axis {
                Axis::Cpu => "Seu CPU",
                Axis::Gpu => "Sua GPU",
                Axis::Ram => "Sua RAM",
            };
            match tier {
                Tier::Excellent => format!("{who} ({subject}) atende aos requisitos recomendados!"),
                Tier::Good => format!("{who} ({subject}) atende aos requisitos mínimos."),
                Tier::Insufficient => format!("{who} ({subject}) está abaixo dos requisitos mínimos."),
            }
        }
        Language::English => {
            let who = match axis {
                Axis::Cpu => "Your CPU",
                Axis::Gpu => "Your GPU",
                Axis::Ram => "Your RAM",
            };
            match tier {
                Tier::Excellent => format!("{who} ({subject}) meets the recommended requirements!"),
                Tier::Good => format!("{who} ({subject}) meets the minimum requirements."),
                Tier::Insufficient => format!("{who} ({subject}) is below the minimum requirements."),
            }
        }
    }
}

/// One-line overall verdict.
pub fn overall_message(lang: Language, can_run_minimum: bool, can_run_recommended: bool) -> &'static str {
    match (lang, can_run_recommended, can_run_minimum) {
        (Language::Portuguese, true, _) => "Roda nos requisitos recomendados.",
        (Language::Portuguese, false, true) => "Roda nos requisitos mínimos.",
        (Language::Portuguese, false, false) => "Não atende aos requisitos mínimos.",
        (Language::English, true, _) => "Runs at recommended settings.",
        (Language::English, false, true) => "Runs at minimum settings.",
        (Language::English, false, false) => "Does not meet the minimum requirements.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_register() {
        assert_eq!(
            axis_message(Language::Portuguese, Axis::Cpu, Tier::Good, "Ryzen 5 5600"),
            "Seu CPU (Ryzen 5 5600) atende aos requisitos mínimos."
        );
        assert_eq!(
            axis_message(Language::Portuguese, Axis::Ram, Tier::Insufficient, "4 GB"),
            "Sua RAM (4 GB) está abaixo dos requisitos mínimos."
        );
    }

    #[test]
    fn english_register() {
        assert_eq!(
            axis_message(Language::English, Axis::Gpu, Tier::Excellent, "RTX 4090"),
            "Your GPU (RTX 4090) meets the recommended requirements!"
        );
        assert_eq!(overall_message(Language::English, true, false), "Runs at minimum settings.");
    }
}
