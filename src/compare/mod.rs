// src/compare/mod.rs
//! # Hardware comparator
//!
//! Scores the user's CPU/GPU against the static ranking tables, reads RAM
//! amounts, and tiers each axis against the parsed minimum/recommended fields.
//!
//! Pure: no I/O, no shared mutable state. Unresolvable names fall to the floor
//! score, unreadable RAM to 0; nothing here returns an error.
//!
//! ```text
//! UserHardware ─┐
//! minimum  ─────┼─ compare() → ComparisonResult { can_run_*, details.{cpu,gpu,ram} }
//! recommended ──┘
//! ```
pub mod messages;
pub mod normalize;
pub mod ram;
pub mod ranking;
pub mod verdict;

use serde::{Deserialize, Serialize};

use crate::config::options::Language;
use crate::specs::requirements::ParsedRequirements;

pub use normalize::{normalize_cpu_name, normalize_gpu_name, HardwareKind};
pub use ranking::{RankingTable, CPU_RANKINGS, GPU_RANKINGS};
pub use verdict::{Axis, AxisDetail, AxisGates, ComparisonResult, Details, Gate, Tier};

use verdict::Stated;

/// What the user typed, verbatim. RAM is a GB count as text ("16").
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserHardware {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
}

impl UserHardware {
    pub fn new(cpu: impl Into<String>, gpu: impl Into<String>, ram: impl Into<String>) -> Self {
        Self { cpu: cpu.into(), gpu: gpu.into(), ram: ram.into() }
    }
}

/// Non-empty requirement text, or nothing.
fn stated(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HardwareComparator {
    pub language: Language,
}

impl HardwareComparator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn compare(
        &self,
        user: &UserHardware,
        minimum: &ParsedRequirements,
        recommended: &ParsedRequirements,
    ) -> ComparisonResult {
        let details = Details {
            cpu: self.scored_axis(Axis::Cpu, HardwareKind::Cpu, &user.cpu,
                minimum.cpu.as_deref(), recommended.cpu.as_deref()),
            gpu: self.scored_axis(Axis::Gpu, HardwareKind::Gpu, &user.gpu,
                minimum.gpu.as_deref(), recommended.gpu.as_deref()),
            ram: self.ram_axis(&user.ram, minimum.ram.as_deref(), recommended.ram.as_deref()),
        };
        ComparisonResult::from_details(details)
    }

    fn scored_axis(
        &self,
        axis: Axis,
        kind: HardwareKind,
        user_input: &str,
        minimum: Option<&str>,
        recommended: Option<&str>,
    ) -> AxisDetail {
        AxisDetail::build(
            user_input,
            u64::from(kind.user_score(user_input)),
            stated(minimum).map(|text| Stated { text, value: u64::from(kind.score(text)) }),
            stated(recommended).map(|text| Stated { text, value: u64::from(kind.score(text)) }),
            |tier| messages::axis_message(self.language, axis, tier, user_input),
        )
    }

    fn ram_axis(&self, user_input: &str, minimum: Option<&str>, recommended: Option<&str>) -> AxisDetail {
        let user_gb = ram::user_ram_gb(user_input);
        AxisDetail::build(
            user_input,
            user_gb,
            stated(minimum).map(|text| Stated { text, value: ram::requirement_ram_gb(text) }),
            stated(recommended).map(|text| Stated { text, value: ram::requirement_ram_gb(text) }),
            |tier| messages::axis_message(self.language, Axis::Ram, tier, &format!("{user_gb} GB")),
        )
    }
}

/// `HardwareComparator::default().compare(..)` (Portuguese messages).
pub fn compare(
    user: &UserHardware,
    minimum: &ParsedRequirements,
    recommended: &ParsedRequirements,
) -> ComparisonResult {
    HardwareComparator::default().compare(user, minimum, recommended)
}
