// src/compare/verdict.rs
//
// Per-axis tiering and the aggregated verdict.
// A stated requirement is Met/Unmet; an unstated one is no barrier. The
// tri-state only collapses to booleans when the axis detail is built.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Cpu,
    Gpu,
    Ram,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Cpu, Axis::Gpu, Axis::Ram];

    pub fn label(&self) -> &'static str {
        match self { Axis::Cpu => "CPU", Axis::Gpu => "GPU", Axis::Ram => "RAM" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    Unstated,
    Met,
    Unmet,
}

impl Gate {
    pub fn check(user: u64, required: Option<u64>) -> Gate {
        match required {
            None => Gate::Unstated,
            Some(req) if user >= req => Gate::Met,
            Some(_) => Gate::Unmet,
        }
    }

    /// Collapse to a boolean; `unstated` is the verdict when nothing was required.
    pub fn passes_or(self, unstated: bool) -> bool {
        match self {
            Gate::Unstated => unstated,
            Gate::Met => true,
            Gate::Unmet => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisGates {
    pub minimum: Gate,
    pub recommended: Gate,
}

impl AxisGates {
    /// Unstated minimum → pass.
    pub fn meets_minimum(&self) -> bool {
        self.minimum.passes_or(true)
    }

    /// Unstated recommended → same as minimum.
    pub fn meets_recommended(&self) -> bool {
        self.recommended.passes_or(self.meets_minimum())
    }

    pub fn tier(&self) -> Tier {
        Tier::from_flags(self.meets_minimum(), self.meets_recommended())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Insufficient,
}

impl Tier {
    pub fn from_flags(meets_minimum: bool, meets_recommended: bool) -> Tier {
        if meets_recommended {
            Tier::Excellent
        } else if meets_minimum {
            Tier::Good
        } else {
            Tier::Insufficient
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Insufficient => "insufficient",
        }
    }
}

/// One stated requirement: raw text plus its derived score (or GB amount).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stated<'a> {
    pub text: &'a str,
    pub value: u64,
}

/// Wire shape of `details.{cpu,gpu,ram}`. For RAM the scores are GB amounts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AxisDetail {
    pub status: Tier,
    pub message: String,
    pub user_input: String,
    pub user_score: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rec_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rec_score: Option<u64>,
    pub meets_minimum: bool,
    pub meets_recommended: bool,
    #[serde(skip)]
    pub gates: AxisGates,
}

impl AxisDetail {
    pub fn build(
        user_input: &str,
        user_score: u64,
        minimum: Option<Stated>,
        recommended: Option<Stated>,
        message: impl FnOnce(Tier) -> String,
    ) -> AxisDetail {
        let gates = AxisGates {
            minimum: Gate::check(user_score, minimum.as_ref().map(|s| s.value)),
            recommended: Gate::check(user_score, recommended.as_ref().map(|s| s.value)),
        };
        let status = gates.tier();

        AxisDetail {
            status,
            message: message(status),
            user_input: user_input.to_string(),
            user_score,
            min_required: minimum.as_ref().map(|s| s.text.to_string()),
            min_score: minimum.as_ref().map(|s| s.value),
            rec_required: recommended.as_ref().map(|s| s.text.to_string()),
            rec_score: recommended.as_ref().map(|s| s.value),
            meets_minimum: gates.meets_minimum(),
            meets_recommended: gates.meets_recommended(),
            gates,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Details {
    pub cpu: AxisDetail,
    pub gpu: AxisDetail,
    pub ram: AxisDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ComparisonResult {
    pub can_run_minimum: bool,
    pub can_run_recommended: bool,
    pub details: Details,
}

impl ComparisonResult {
    /// Bottleneck aggregation: one failing axis fails the tier.
    pub fn from_details(details: Details) -> ComparisonResult {
        let axes = [&details.cpu, &details.gpu, &details.ram];
        ComparisonResult {
            can_run_minimum: axes.iter().all(|a| a.gates.meets_minimum()),
            can_run_recommended: axes.iter().all(|a| a.gates.meets_recommended()),
            details,
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisDetail {
        match axis {
            Axis::Cpu => &self.details.cpu,
            Axis::Gpu => &self.details.gpu,
            Axis::Ram => &self.details.ram,
        }
    }

    pub fn axes(&self) -> impl Iterator<Item = (Axis, &AxisDetail)> + '_ {
        Axis::ALL.into_iter().map(move |a| (a, self.axis(a)))
    }

    pub fn overall_tier(&self) -> Tier {
        Tier::from_flags(self.can_run_minimum, self.can_run_recommended)
    }
}
