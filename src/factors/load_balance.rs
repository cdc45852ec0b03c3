use crate::core::explain::Reason;
use crate::core::metrics::PlayerMetrics;
use crate::factors::{FactorKind, RiskFactor};

const SEVERE_SPIKE_ACWR: f64 = 1.6;
const SPIKE_ACWR: f64 = 1.3;
const UNDERLOAD_ACWR: f64 = 0.8;

const SEVERE_SPIKE_WEIGHT: f64 = 0.40;
const SPIKE_WEIGHT: f64 = 0.25;
const UNDERLOAD_WEIGHT: f64 = 0.10;

const SPIKE_REASON_ACWR: f64 = 1.3;

pub struct LoadBalanceFactor;

impl RiskFactor for LoadBalanceFactor {
    fn kind(&self) -> FactorKind {
        FactorKind::LoadBalance
    }

    fn contribution(&self, metrics: &PlayerMetrics) -> f64 {
        let acwr = metrics.acwr;
        if acwr > SEVERE_SPIKE_ACWR {
            SEVERE_SPIKE_WEIGHT
        } else if acwr > SPIKE_ACWR {
            SPIKE_WEIGHT
        } else if acwr < UNDERLOAD_ACWR {
            UNDERLOAD_WEIGHT
        } else {
            0.0
        }
    }

    // The underload tier scores but has no reason of its own.
    fn reasons(&self, metrics: &PlayerMetrics) -> Vec<Reason> {
        if metrics.acwr > SPIKE_REASON_ACWR {
            vec![Reason::WorkloadSpike]
        } else {
            Vec::new()
        }
    }
}
