use crate::core::explain::Reason;
use crate::core::metrics::PlayerMetrics;
use serde::Serialize;
use std::fmt;

pub mod load_balance;
pub mod neuromuscular;
pub mod running;
pub mod wellness;

/// One additive term of the risk score.
///
/// Contributions must be non-negative. Reason triggers are independent of the
/// scoring tiers and may use different thresholds.
pub trait RiskFactor {
    fn kind(&self) -> FactorKind;
    fn contribution(&self, metrics: &PlayerMetrics) -> f64;
    fn reasons(&self, metrics: &PlayerMetrics) -> Vec<Reason>;
}

/// Factors in scoring and explanation order.
pub fn all_factors() -> Vec<Box<dyn RiskFactor>> {
    vec![
        Box::new(load_balance::LoadBalanceFactor),
        Box::new(wellness::WellnessFactor),
        Box::new(running::RunningExposureFactor),
        Box::new(neuromuscular::NeuromuscularFactor),
    ]
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    LoadBalance,
    Wellness,
    RunningExposure,
    Neuromuscular,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadBalance => write!(f, "Load balance"),
            Self::Wellness => write!(f, "Wellness"),
            Self::RunningExposure => write!(f, "High-speed running"),
            Self::Neuromuscular => write!(f, "Neuromuscular load"),
        }
    }
}
