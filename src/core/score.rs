use crate::config::FailOn;
use crate::core::metrics::PlayerMetrics;
use crate::factors::{self, FactorKind};
use serde::Serialize;

pub const MAX_RISK: f64 = 1.0;

pub const HIGH_RISK_THRESHOLD: f64 = 0.75;
pub const MODERATE_RISK_THRESHOLD: f64 = 0.55;
pub const MONITOR_THRESHOLD: f64 = 0.35;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Contribution {
    pub factor: FactorKind,
    pub value: f64,
}

pub fn contributions(metrics: &PlayerMetrics) -> Vec<Contribution> {
    factors::all_factors()
        .iter()
        .map(|factor| Contribution {
            factor: factor.kind(),
            value: factor.contribution(metrics),
        })
        .collect()
}

/// Sum of contributions before clamping.
pub fn raw_score(contributions: &[Contribution]) -> f64 {
    contributions
        .iter()
        .fold(0.0, |total, contribution| total + contribution.value)
}

/// Injury risk probability in `[0.0, 1.0]`.
///
/// Total over every input, including out-of-domain values and NaN.
pub fn compute_risk(metrics: &PlayerMetrics) -> f64 {
    raw_score(&contributions(metrics)).min(MAX_RISK)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Monitor,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Monitor => "MONITOR",
            Self::Moderate => "MODERATE RISK",
            Self::High => "HIGH RISK",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Self::Low => "Full training participation",
            Self::Monitor => "Maintain load, prioritize recovery strategies",
            Self::Moderate => "Modified training, limit high-speed exposure",
            Self::High => "Medical screening + reduce training load 40%",
        }
    }

    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::Monitor => self >= Self::Monitor,
            FailOn::Moderate => self >= Self::Moderate,
            FailOn::High => self >= Self::High,
        }
    }
}

/// Threshold ladder; a value sitting exactly on a threshold takes the higher tier.
pub fn classify(risk: f64) -> RiskTier {
    if risk >= HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if risk >= MODERATE_RISK_THRESHOLD {
        RiskTier::Moderate
    } else if risk >= MONITOR_THRESHOLD {
        RiskTier::Monitor
    } else {
        RiskTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scenario_monitor_defaults() {
        let metrics = PlayerMetrics {
            acwr: 1.15,
            fatigue_z: 1.0,
            soreness_z: 0.8,
            high_speed_distance: 950,
            accelerations: 60,
            decelerations: 65,
        };

        let parts = contributions(&metrics);
        assert_eq!(parts[0].value, 0.0);
        assert!(approx(parts[1].value, 0.24));
        assert_eq!(parts[2].value, 0.10);
        assert_eq!(parts[3].value, 0.08);

        let risk = compute_risk(&metrics);
        assert!(approx(risk, 0.42), "risk was {risk}");
        assert_eq!(classify(risk), RiskTier::Monitor);
        assert_eq!(
            classify(risk).action(),
            "Maintain load, prioritize recovery strategies"
        );
    }

    #[test]
    fn scenario_everything_elevated_clamps_to_one() {
        let metrics = PlayerMetrics {
            acwr: 2.0,
            fatigue_z: 2.0,
            soreness_z: 2.0,
            high_speed_distance: 1500,
            accelerations: 80,
            decelerations: 80,
        };

        assert!(approx(raw_score(&contributions(&metrics)), 1.29));
        assert_eq!(compute_risk(&metrics), 1.0);
        assert_eq!(classify(compute_risk(&metrics)), RiskTier::High);
    }

    #[test]
    fn scenario_baseline_scores_zero() {
        let metrics = PlayerMetrics {
            acwr: 1.0,
            fatigue_z: -1.0,
            soreness_z: -1.0,
            high_speed_distance: 100,
            accelerations: 10,
            decelerations: 10,
        };

        assert_eq!(compute_risk(&metrics), 0.0);
        assert_eq!(classify(0.0), RiskTier::Low);
        assert_eq!(RiskTier::Low.action(), "Full training participation");
    }

    #[test]
    fn classify_boundaries_take_the_higher_tier() {
        assert_eq!(classify(0.75), RiskTier::High);
        assert_eq!(classify(0.749_999), RiskTier::Moderate);
        assert_eq!(classify(0.55), RiskTier::Moderate);
        assert_eq!(classify(0.549_999), RiskTier::Monitor);
        assert_eq!(classify(0.35), RiskTier::Monitor);
        assert_eq!(classify(0.349_999), RiskTier::Low);
        assert_eq!(classify(1.0), RiskTier::High);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(RiskTier::High.as_str(), "HIGH RISK");
        assert_eq!(RiskTier::Moderate.as_str(), "MODERATE RISK");
        assert_eq!(RiskTier::Monitor.as_str(), "MONITOR");
        assert_eq!(RiskTier::Low.as_str(), "LOW RISK");
        assert_eq!(
            RiskTier::High.action(),
            "Medical screening + reduce training load 40%"
        );
        assert_eq!(
            RiskTier::Moderate.action(),
            "Modified training, limit high-speed exposure"
        );
    }

    #[test]
    fn fail_on_is_inclusive() {
        assert!(RiskTier::High.meets_fail_on(FailOn::High));
        assert!(!RiskTier::Moderate.meets_fail_on(FailOn::High));
        assert!(RiskTier::Moderate.meets_fail_on(FailOn::Moderate));
        assert!(RiskTier::Monitor.meets_fail_on(FailOn::Monitor));
        assert!(!RiskTier::Low.meets_fail_on(FailOn::Monitor));
        assert!(!RiskTier::High.meets_fail_on(FailOn::None));
    }

    #[test]
    fn wellness_is_summed_as_one_term_before_the_factor_fold() {
        let metrics = PlayerMetrics {
            acwr: 1.45,
            fatigue_z: 0.45,
            soreness_z: 1.64,
            high_speed_distance: 0,
            accelerations: 0,
            decelerations: 0,
        };

        // Adding fatigue and soreness one at a time onto the load term rounds
        // just under the MODERATE threshold.
        let one_at_a_time = 0.25 + 0.45 * 0.12 + 1.64 * 0.15;
        assert_eq!(classify(one_at_a_time), RiskTier::Monitor);

        let risk = compute_risk(&metrics);
        assert_eq!(risk, 0.25 + (0.45 * 0.12 + 1.64 * 0.15));
        assert_eq!(classify(risk), RiskTier::Moderate);
    }

    #[test]
    fn underload_tier_breaks_acwr_monotonicity() {
        let underloaded = PlayerMetrics {
            acwr: 0.7,
            ..PlayerMetrics::default()
        };
        let balanced = PlayerMetrics {
            acwr: 1.0,
            ..PlayerMetrics::default()
        };
        assert!(compute_risk(&underloaded) > compute_risk(&balanced));
    }

    #[test]
    fn nan_inputs_score_zero() {
        let metrics = PlayerMetrics {
            acwr: f64::NAN,
            fatigue_z: f64::NAN,
            soreness_z: f64::NAN,
            high_speed_distance: 0,
            accelerations: 0,
            decelerations: 0,
        };
        assert_eq!(compute_risk(&metrics), 0.0);
    }

    fn metrics_strategy() -> impl Strategy<Value = PlayerMetrics> {
        (
            0.5f64..=3.0,
            -3.0f64..=3.0,
            -3.0f64..=3.0,
            0i64..=3000,
            0i64..=150,
            0i64..=150,
        )
            .prop_map(
                |(acwr, fatigue_z, soreness_z, high_speed_distance, accelerations, decelerations)| {
                    PlayerMetrics {
                        acwr,
                        fatigue_z,
                        soreness_z,
                        high_speed_distance,
                        accelerations,
                        decelerations,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn risk_is_bounded(metrics in metrics_strategy()) {
            let risk = compute_risk(&metrics);
            prop_assert!((0.0..=1.0).contains(&risk), "risk {} out of bounds", risk);
        }

        #[test]
        fn contributions_are_non_negative(metrics in metrics_strategy()) {
            for contribution in contributions(&metrics) {
                prop_assert!(contribution.value >= 0.0);
            }
        }

        #[test]
        fn risk_is_clamped_raw_score(metrics in metrics_strategy()) {
            let raw = raw_score(&contributions(&metrics));
            prop_assert_eq!(compute_risk(&metrics), raw.min(1.0));
        }

        #[test]
        fn monotonic_in_each_input(
            metrics in metrics_strategy(),
            float_step in 0.0f64..2.0,
            int_step in 0i64..500,
        ) {
            let base = compute_risk(&metrics);
            if metrics.acwr >= 0.8 {
                let raised_acwr = PlayerMetrics { acwr: metrics.acwr + float_step, ..metrics };
                prop_assert!(compute_risk(&raised_acwr) >= base);
            }
            let raised = [
                PlayerMetrics { fatigue_z: metrics.fatigue_z + float_step, ..metrics },
                PlayerMetrics { soreness_z: metrics.soreness_z + float_step, ..metrics },
                PlayerMetrics { high_speed_distance: metrics.high_speed_distance + int_step, ..metrics },
                PlayerMetrics { accelerations: metrics.accelerations + int_step, ..metrics },
                PlayerMetrics { decelerations: metrics.decelerations + int_step, ..metrics },
            ];
            for candidate in raised {
                prop_assert!(compute_risk(&candidate) >= base);
            }
        }
    }
}
