use crate::config::{Config, FailOn, InputPolicy};
use crate::core::explain::Reason;
use crate::core::metrics::{DomainViolation, PlayerMetrics};
use crate::core::score::{Contribution, MAX_RISK, RiskTier};
use colored::Colorize;
use serde::Serialize;

fn colored_tier(tier: RiskTier) -> String {
    match tier {
        RiskTier::High => tier.as_str().red().bold().to_string(),
        RiskTier::Moderate => tier.as_str().truecolor(255, 140, 0).bold().to_string(),
        RiskTier::Monitor => tier.as_str().yellow().bold().to_string(),
        RiskTier::Low => tier.as_str().green().bold().to_string(),
    }
}

pub fn format_percent(risk: f64) -> String {
    format!("{:.1}%", risk * 100.0)
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct RiskAssessment {
    pub metrics: PlayerMetrics,
    pub risk_probability: f64,
    pub raw_score: f64,
    pub contributions: Vec<Contribution>,
    pub tier: RiskTier,
    pub reasons: Vec<Reason>,
    pub input_policy: InputPolicy,
    pub domain_warnings: Vec<DomainViolation>,
    pub notes: Option<String>,
    pub exit: ExitStatus,
}

impl RiskAssessment {
    pub fn recommended_action(&self) -> &'static str {
        self.tier.action()
    }

    pub fn is_clamped(&self) -> bool {
        self.raw_score > MAX_RISK
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReason {
    pub code: Reason,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub risk_probability: f64,
    pub risk_percent: String,
    pub raw_score: f64,
    pub tier: RiskTier,
    pub classification: &'static str,
    pub recommended_action: &'static str,
    pub contributions: Vec<Contribution>,
    pub reasons: Vec<JsonReason>,
    pub metrics: PlayerMetrics,
    pub input_policy: InputPolicy,
    pub domain_warnings: Vec<DomainViolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&RiskAssessment> for JsonReport {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            risk_probability: assessment.risk_probability,
            risk_percent: format_percent(assessment.risk_probability),
            raw_score: assessment.raw_score,
            tier: assessment.tier,
            classification: assessment.tier.as_str(),
            recommended_action: assessment.recommended_action(),
            contributions: assessment.contributions.clone(),
            reasons: assessment
                .reasons
                .iter()
                .map(|reason| JsonReason {
                    code: *reason,
                    message: reason.message(),
                })
                .collect(),
            metrics: assessment.metrics,
            input_policy: assessment.input_policy,
            domain_warnings: assessment.domain_warnings.clone(),
            notes: assessment.notes.clone(),
        }
    }
}

pub fn evaluate_exit(tier: RiskTier, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if tier.meets_fail_on(cfg.general.fail_on) {
        reasons.push(match cfg.general.fail_on {
            FailOn::High => "classified HIGH RISK".to_string(),
            fail_on => format!("classified {} (fail_on = {})", tier.as_str(), fail_on),
        });
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(assessment: &RiskAssessment) {
    println!("Daily Injury Risk Assessment");
    println!(
        "Injury Risk Probability: {}",
        format_percent(assessment.risk_probability)
    );
    println!("Risk Classification: {}", colored_tier(assessment.tier));
    println!("Recommended Action: {}", assessment.recommended_action());

    println!();
    println!("{}", "Contributions".bold());
    for contribution in &assessment.contributions {
        println!(
            "{:<20} +{:.2}",
            contribution.factor.to_string(),
            contribution.value
        );
    }
    if assessment.is_clamped() {
        println!(
            "raw score {:.2} capped at {:.2}",
            assessment.raw_score, MAX_RISK
        );
    }

    println!();
    println!("{}", "Why this recommendation was made".bold());
    for reason in &assessment.reasons {
        let marker = if reason.is_flag() {
            "!".yellow().to_string()
        } else {
            "ok".green().to_string()
        };
        println!("[{}] {}", marker, reason);
    }

    if !assessment.domain_warnings.is_empty() {
        let action = match assessment.input_policy {
            InputPolicy::Clamp => "clamped before scoring",
            InputPolicy::Warn | InputPolicy::Reject => "scored as given",
        };
        println!();
        println!(
            "{} ({})",
            "INPUT WARNINGS".yellow().bold(),
            assessment.domain_warnings.len()
        );
        for warning in &assessment.domain_warnings {
            println!("{} -> {}", warning, action);
        }
    }

    if let Some(notes) = &assessment.notes {
        println!();
        println!("{}", "Staff notes (demo only)".bold());
        println!("{}", notes);
    }

    println!();
    if assessment.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", assessment.exit.reason_line());
    }
}
