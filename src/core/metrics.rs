use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACWR_DOMAIN: (f64, f64) = (0.5, 3.0);
pub const Z_SCORE_DOMAIN: (f64, f64) = (-3.0, 3.0);
pub const HIGH_SPEED_DISTANCE_DOMAIN: (i64, i64) = (0, 3000);
pub const EVENT_COUNT_DOMAIN: (i64, i64) = (0, 150);

/// One player-day of monitoring inputs.
///
/// Values outside the documented domains are accepted and scored as given;
/// enforcing the domains is up to the caller (see [`PlayerMetrics::clamped`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerMetrics {
    /// Acute:chronic workload ratio.
    pub acwr: f64,
    pub fatigue_z: f64,
    pub soreness_z: f64,
    /// Metres covered above the high-speed threshold.
    pub high_speed_distance: i64,
    pub accelerations: i64,
    pub decelerations: i64,
}

impl Default for PlayerMetrics {
    fn default() -> Self {
        Self {
            acwr: 1.15,
            fatigue_z: 1.0,
            soreness_z: 0.8,
            high_speed_distance: 950,
            accelerations: 60,
            decelerations: 65,
        }
    }
}

impl PlayerMetrics {
    pub fn neuromuscular_load(&self) -> i64 {
        self.accelerations.saturating_add(self.decelerations)
    }

    pub fn domain_violations(&self) -> Vec<DomainViolation> {
        let mut violations = Vec::new();

        check_float(&mut violations, Metric::Acwr, self.acwr, ACWR_DOMAIN);
        check_float(&mut violations, Metric::FatigueZ, self.fatigue_z, Z_SCORE_DOMAIN);
        check_float(&mut violations, Metric::SorenessZ, self.soreness_z, Z_SCORE_DOMAIN);
        check_int(
            &mut violations,
            Metric::HighSpeedDistance,
            self.high_speed_distance,
            HIGH_SPEED_DISTANCE_DOMAIN,
        );
        check_int(
            &mut violations,
            Metric::Accelerations,
            self.accelerations,
            EVENT_COUNT_DOMAIN,
        );
        check_int(
            &mut violations,
            Metric::Decelerations,
            self.decelerations,
            EVENT_COUNT_DOMAIN,
        );

        violations
    }

    /// Copy with every input pulled into its documented domain. NaN stays NaN.
    pub fn clamped(&self) -> Self {
        Self {
            acwr: self.acwr.clamp(ACWR_DOMAIN.0, ACWR_DOMAIN.1),
            fatigue_z: self.fatigue_z.clamp(Z_SCORE_DOMAIN.0, Z_SCORE_DOMAIN.1),
            soreness_z: self.soreness_z.clamp(Z_SCORE_DOMAIN.0, Z_SCORE_DOMAIN.1),
            high_speed_distance: self
                .high_speed_distance
                .clamp(HIGH_SPEED_DISTANCE_DOMAIN.0, HIGH_SPEED_DISTANCE_DOMAIN.1),
            accelerations: self
                .accelerations
                .clamp(EVENT_COUNT_DOMAIN.0, EVENT_COUNT_DOMAIN.1),
            decelerations: self
                .decelerations
                .clamp(EVENT_COUNT_DOMAIN.0, EVENT_COUNT_DOMAIN.1),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Acwr,
    FatigueZ,
    SorenessZ,
    HighSpeedDistance,
    Accelerations,
    Decelerations,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acwr => write!(f, "acwr"),
            Self::FatigueZ => write!(f, "fatigue_z"),
            Self::SorenessZ => write!(f, "soreness_z"),
            Self::HighSpeedDistance => write!(f, "high_speed_distance"),
            Self::Accelerations => write!(f, "accelerations"),
            Self::Decelerations => write!(f, "decelerations"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DomainViolation {
    pub metric: Metric,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside [{}, {}]",
            self.metric, self.value, self.min, self.max
        )
    }
}

fn check_float(out: &mut Vec<DomainViolation>, metric: Metric, value: f64, domain: (f64, f64)) {
    if !(domain.0..=domain.1).contains(&value) {
        out.push(DomainViolation {
            metric,
            value,
            min: domain.0,
            max: domain.1,
        });
    }
}

fn check_int(out: &mut Vec<DomainViolation>, metric: Metric, value: i64, domain: (i64, i64)) {
    if !(domain.0..=domain.1).contains(&value) {
        out.push(DomainViolation {
            metric,
            value: value as f64,
            min: domain.0 as f64,
            max: domain.1 as f64,
        });
    }
}
