use crate::core::explain::Reason;
use crate::core::metrics::PlayerMetrics;
use crate::factors::{FactorKind, RiskFactor};

const VERY_HIGH_EVENTS: i64 = 140;
const HIGH_EVENTS: i64 = 100;

const VERY_HIGH_WEIGHT: f64 = 0.15;
const HIGH_WEIGHT: f64 = 0.08;

const DEMAND_REASON_EVENTS: i64 = 120;

/// Combined acceleration and deceleration count.
pub struct NeuromuscularFactor;

impl RiskFactor for NeuromuscularFactor {
    fn kind(&self) -> FactorKind {
        FactorKind::Neuromuscular
    }

    fn contribution(&self, metrics: &PlayerMetrics) -> f64 {
        match metrics.neuromuscular_load() {
            events if events > VERY_HIGH_EVENTS => VERY_HIGH_WEIGHT,
            events if events > HIGH_EVENTS => HIGH_WEIGHT,
            _ => 0.0,
        }
    }

    // Sits between the two scoring tiers, so 101..=120 scores without a reason.
    fn reasons(&self, metrics: &PlayerMetrics) -> Vec<Reason> {
        if metrics.neuromuscular_load() > DEMAND_REASON_EVENTS {
            vec![Reason::NeuromuscularDemand]
        } else {
            Vec::new()
        }
    }
}
