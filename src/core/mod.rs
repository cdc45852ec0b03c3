pub mod explain;
pub mod metrics;
pub mod report;
pub mod score;

use crate::config::{Config, InputPolicy};
use crate::core::metrics::{DomainViolation, PlayerMetrics};
use crate::core::report::RiskAssessment;
use anyhow::{Result, bail};

/// Scores one player-day and assembles the report shown to staff.
pub fn assess(
    requested: PlayerMetrics,
    cfg: &Config,
    notes: Option<String>,
) -> Result<RiskAssessment> {
    let input_policy = cfg.general.input_policy;
    let (metrics, domain_warnings) = apply_input_policy(requested, input_policy)?;

    let contributions = score::contributions(&metrics);
    for contribution in &contributions {
        log::debug!("{}: +{:.3}", contribution.factor, contribution.value);
    }

    let raw_score = score::raw_score(&contributions);
    let risk_probability = score::compute_risk(&metrics);
    let tier = score::classify(risk_probability);
    log::debug!(
        "raw score {:.3}, risk {:.3}, tier {}",
        raw_score,
        risk_probability,
        tier.as_str()
    );

    let reasons = explain::explain(&metrics);
    let exit = report::evaluate_exit(tier, cfg);

    Ok(RiskAssessment {
        metrics,
        risk_probability,
        raw_score,
        contributions,
        tier,
        reasons,
        input_policy,
        domain_warnings,
        notes: notes.filter(|text| !text.trim().is_empty()),
        exit,
    })
}

fn apply_input_policy(
    metrics: PlayerMetrics,
    policy: InputPolicy,
) -> Result<(PlayerMetrics, Vec<DomainViolation>)> {
    let violations = metrics.domain_violations();
    if violations.is_empty() {
        return Ok((metrics, violations));
    }

    match policy {
        InputPolicy::Warn => {
            for violation in &violations {
                log::warn!("{}; scoring unclamped input", violation);
            }
            Ok((metrics, violations))
        }
        InputPolicy::Clamp => {
            for violation in &violations {
                log::warn!("{}; clamping into domain", violation);
            }
            Ok((metrics.clamped(), violations))
        }
        InputPolicy::Reject => {
            let listed: Vec<String> = violations.iter().map(ToString::to_string).collect();
            bail!(
                "input outside documented domain: {} (input_policy = reject)",
                listed.join("; ")
            );
        }
    }
}
