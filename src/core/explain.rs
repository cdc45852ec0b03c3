use crate::core::metrics::PlayerMetrics;
use crate::factors;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    WorkloadSpike,
    ElevatedFatigue,
    MuscleSoreness,
    HighSpeedExposure,
    NeuromuscularDemand,
    /// Sentinel returned when nothing else triggers.
    NoFlags,
}

impl Reason {
    pub fn message(self) -> &'static str {
        match self {
            Self::WorkloadSpike => "Acute workload spike relative to chronic load",
            Self::ElevatedFatigue => "Elevated fatigue reported by the player",
            Self::MuscleSoreness => "Increased muscle soreness",
            Self::HighSpeedExposure => "High exposure to high-speed running",
            Self::NeuromuscularDemand => "High neuromuscular demand (accel/decel load)",
            Self::NoFlags => "No major risk flags identified",
        }
    }

    pub fn is_flag(self) -> bool {
        !matches!(self, Self::NoFlags)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Every triggered reason in factor order, or `[NoFlags]` when none fire.
pub fn explain(metrics: &PlayerMetrics) -> Vec<Reason> {
    let mut reasons: Vec<Reason> = factors::all_factors()
        .iter()
        .flat_map(|factor| factor.reasons(metrics))
        .collect();

    if reasons.is_empty() {
        reasons.push(Reason::NoFlags);
    }

    reasons
}
