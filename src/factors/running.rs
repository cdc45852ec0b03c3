use crate::core::explain::Reason;
use crate::core::metrics::PlayerMetrics;
use crate::factors::{FactorKind, RiskFactor};

const VERY_HIGH_DISTANCE_M: i64 = 1200;
const HIGH_DISTANCE_M: i64 = 800;

const VERY_HIGH_WEIGHT: f64 = 0.20;
const HIGH_WEIGHT: f64 = 0.10;

const EXPOSURE_REASON_M: i64 = 800;

pub struct RunningExposureFactor;

impl RiskFactor for RunningExposureFactor {
    fn kind(&self) -> FactorKind {
        FactorKind::RunningExposure
    }

    fn contribution(&self, metrics: &PlayerMetrics) -> f64 {
        match metrics.high_speed_distance {
            distance if distance > VERY_HIGH_DISTANCE_M => VERY_HIGH_WEIGHT,
            distance if distance > HIGH_DISTANCE_M => HIGH_WEIGHT,
            _ => 0.0,
        }
    }

    fn reasons(&self, metrics: &PlayerMetrics) -> Vec<Reason> {
        if metrics.high_speed_distance > EXPOSURE_REASON_M {
            vec![Reason::HighSpeedExposure]
        } else {
            Vec::new()
        }
    }
}
