// Risk tier classification.
//
// The tier is a pure function of the 0-100 risk score. Secondary signals
// (voice, emotional, entity) are rendered in the report but never fold into
// the top-line tier. Scores are clamped by the producer; anything outside
// 0-100 is an upstream contract violation, not something to repair here.

use serde::Serialize;

use crate::analysis::model::EntitySeverity;

/// Risk tiers, ordered by descending severity. Thresholds are closed lower
/// bounds, evaluated highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTier {
    Critical,
    High,
    Suspicious,
    LowRisk,
    LikelySafe,
}

impl RiskTier {
    /// Determine the tier from a risk score (0-100). First match wins.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => RiskTier::Critical,
            s if s >= 70.0 => RiskTier::High,
            s if s >= 50.0 => RiskTier::Suspicious,
            s if s >= 30.0 => RiskTier::LowRisk,
            _ => RiskTier::LikelySafe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Critical => "CRITICAL",
            RiskTier::High => "HIGH",
            RiskTier::Suspicious => "SUSPICIOUS",
            RiskTier::LowRisk => "LOW_RISK",
            RiskTier::LikelySafe => "LIKELY_SAFE",
        }
    }

    /// Human-facing label for report bodies.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Critical => "Critical",
            RiskTier::High => "High Risk",
            RiskTier::Suspicious => "Suspicious",
            RiskTier::LowRisk => "Low Risk",
            RiskTier::LikelySafe => "Likely Safe",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            RiskTier::Critical => ColorToken::Critical,
            RiskTier::High => ColorToken::Danger,
            RiskTier::Suspicious => ColorToken::Warning,
            RiskTier::LowRisk => ColorToken::Caution,
            RiskTier::LikelySafe => ColorToken::Success,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable color vocabulary shared by tier badges, the manipulation bucket,
/// entity severity, and timeline points. The display collaborator maps these
/// to actual colors; the report core never emits hex values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Success,
    Caution,
    Warning,
    Danger,
    Critical,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Success => "success",
            ColorToken::Caution => "caution",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::Critical => "critical",
        }
    }
}

/// Color bucket for a normalized (0-100) manipulation-risk value.
pub fn manipulation_color(pct: f64) -> ColorToken {
    match pct {
        p if p > 70.0 => ColorToken::Danger,
        p if p > 50.0 => ColorToken::Warning,
        p if p > 30.0 => ColorToken::Caution,
        _ => ColorToken::Success,
    }
}

/// Color for an entity-extraction severity.
pub fn severity_color(severity: EntitySeverity) -> ColorToken {
    match severity {
        EntitySeverity::Critical => ColorToken::Critical,
        EntitySeverity::High => ColorToken::Danger,
        EntitySeverity::Medium => ColorToken::Warning,
        EntitySeverity::Low => ColorToken::Success,
    }
}

/// Color for a timeline point's risk score.
pub fn timeline_color(score: f64) -> ColorToken {
    match score {
        s if s >= 70.0 => ColorToken::Danger,
        s if s >= 50.0 => ColorToken::Warning,
        s if s >= 30.0 => ColorToken::Caution,
        _ => ColorToken::Success,
    }
}

/// The classifier's verdict: tier plus the matching recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub label: &'static str,
    pub color: ColorToken,
    pub recommendation_title: &'static str,
    pub recommendation_body: &'static str,
}

/// Classify a 0-100 risk score into a tiered assessment.
pub fn classify(score: f64) -> RiskAssessment {
    debug_assert!(
        (0.0..=100.0).contains(&score),
        "risk score outside producer contract: {score}"
    );
    let tier = RiskTier::from_score(score);
    let (recommendation_title, recommendation_body) = recommendation_for(tier);
    RiskAssessment {
        tier,
        label: tier.label(),
        color: tier.color(),
        recommendation_title,
        recommendation_body,
    }
}

fn recommendation_for(tier: RiskTier) -> (&'static str, &'static str) {
    match tier {
        RiskTier::Critical => (
            "CRITICAL: HANG UP IMMEDIATELY",
            "This is almost certainly a scam. Do NOT provide any personal or \
             financial information. Report the number to your bank and local \
             authorities.",
        ),
        RiskTier::High => (
            "HIGH RISK: END CALL",
            "High probability of fraud detected. Legitimate institutions do \
             not operate this way. Hang up and contact your bank directly \
             using a verified number.",
        ),
        RiskTier::Suspicious => (
            "SUSPICIOUS: BE CAUTIOUS",
            "Multiple suspicious patterns detected. Verify independently \
             before taking any action. Do not share sensitive information.",
        ),
        RiskTier::LowRisk => (
            "LOW RISK: REMAIN VIGILANT",
            "Some unusual patterns detected, but nothing conclusive. Stay \
             alert but this may be a legitimate call.",
        ),
        RiskTier::LikelySafe => (
            "LIKELY SAFE",
            "No major scam indicators detected. This appears to be a \
             legitimate call, but always practice caution with unsolicited \
             calls.",
        ),
    }
}
