use crate::core::explain::Reason;
use crate::core::metrics::PlayerMetrics;
use crate::factors::{FactorKind, RiskFactor};

const FATIGUE_WEIGHT: f64 = 0.12;
const SORENESS_WEIGHT: f64 = 0.15;

const FATIGUE_REASON_Z: f64 = 1.0;
const SORENESS_REASON_Z: f64 = 1.0;

/// Self-reported fatigue and soreness. Only positive z-scores add risk.
pub struct WellnessFactor;

impl RiskFactor for WellnessFactor {
    fn kind(&self) -> FactorKind {
        FactorKind::Wellness
    }

    fn contribution(&self, metrics: &PlayerMetrics) -> f64 {
        // f64::max ignores NaN, so a NaN z-score contributes zero.
        metrics.fatigue_z.max(0.0) * FATIGUE_WEIGHT + metrics.soreness_z.max(0.0) * SORENESS_WEIGHT
    }

    fn reasons(&self, metrics: &PlayerMetrics) -> Vec<Reason> {
        let mut reasons = Vec::new();
        if metrics.fatigue_z > FATIGUE_REASON_Z {
            reasons.push(Reason::ElevatedFatigue);
        }
        if metrics.soreness_z > SORENESS_REASON_Z {
            reasons.push(Reason::MuscleSoreness);
        }
        reasons
    }
}
