// Data models — Rust structs that map to the backend's analysis response.
//
// These are deserialized once per analysis cycle and treated as read-only
// from then on. Every derived display value (percentages, counts, resolved
// fallbacks) is computed into a NormalizedResult — nothing is ever written
// back into these types. Unknown JSON fields are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One completed call analysis, as returned by `POST /analyze-call`.
///
/// The numeric risk score and the pattern list are always present; every
/// sub-analysis is optional and arrives as `null` or is missing entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    /// Overall risk score, 0-100 (clamped by the producer).
    pub risk_score: f64,
    /// The producer's own level string (e.g. "CRITICAL_SCAM"). Display only;
    /// the tier is recomputed locally from the score.
    pub risk_level: String,
    pub primary_threat: String,
    /// Overall confidence in the analysis, 0-1 fraction.
    pub confidence: f64,
    pub call_duration_seconds: f64,
    #[serde(default)]
    pub language_detected: Option<String>,
    #[serde(default)]
    pub transcription: Option<String>,
    pub explanation: String,
    #[serde(default)]
    pub detected_patterns: Vec<Pattern>,
    #[serde(default)]
    pub risk_timeline: Option<Vec<TimelinePoint>>,
    #[serde(default)]
    pub known_scam_match: Option<KnownScamMatch>,
    #[serde(default)]
    pub voice_analysis: Option<VoiceAnalysis>,
    #[serde(default)]
    pub emotional_analysis: Option<EmotionalAnalysis>,
    #[serde(default)]
    pub entity_analysis: Option<EntityAnalysis>,
}

/// A single detected social-engineering pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct Pattern {
    pub pattern_name: String,
    /// Keywords that triggered the detection, in display order.
    pub keywords: Vec<String>,
    pub explanation: String,
    /// How many points this pattern added to the risk score.
    pub risk_contribution: f64,
}

/// Risk score progression at one moment of the call.
///
/// The producer does not guarantee the sequence is sorted by timestamp;
/// consumers render it in the order received and never assume monotonicity.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelinePoint {
    /// Seconds from the start of the call.
    pub timestamp: f64,
    pub risk_score: f64,
    pub reason: String,
}

/// Match against the catalogue of known fraud campaigns.
#[derive(Debug, Clone, Deserialize)]
pub struct KnownScamMatch {
    pub is_known_scam: bool,
    /// Match confidence, 0-1 fraction.
    #[serde(default)]
    pub overall_match_confidence: f64,
    #[serde(default)]
    pub top_match: Option<CampaignMatch>,
}

/// The best-matching catalogued campaign.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignMatch {
    pub campaign_name: String,
    pub severity: String,
    pub description: String,
    pub loss_average: String,
    #[serde(default)]
    pub typical_targets: Vec<String>,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
}

/// Voice-biometric signals extracted from the audio.
///
/// All fields are defaulted so a payload carrying only an `error` marker
/// still deserializes; a present `error` invalidates the whole section.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceAnalysis {
    /// Speech speed consistency, 0-1 fraction.
    #[serde(default)]
    pub speaking_rate: f64,
    /// Emotional modulation, 0-1 fraction.
    #[serde(default)]
    pub pitch_variation: f64,
    /// Hesitation gaps, 0-1 fraction.
    #[serde(default)]
    pub silence_ratio: f64,
    /// Background noise, 0-1 fraction.
    #[serde(default)]
    pub noise_level: f64,
    /// Synthetic-speech / stress marker score, 0-100.
    #[serde(default)]
    pub voice_quality_score: f64,
    #[serde(default)]
    pub risk_indicators: Vec<String>,
    /// Set when the voice pipeline failed; the section must be suppressed.
    #[serde(default)]
    pub error: Option<String>,
}

/// Emotional tone and psychological-manipulation signals.
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionalAnalysis {
    /// Ambiguous scale: a value at or below 1 is a 0-1 fraction, anything
    /// larger is already a 0-100 percentage. Unified by the normalizer.
    pub manipulation_risk: f64,
    #[serde(default)]
    pub tone_assessment: Option<ToneAssessment>,
    /// Fallback source for the tactics text when `tone_assessment` is absent.
    #[serde(default)]
    pub tactics_detected: Option<Vec<String>>,
    /// Keyed by emotion name. BTreeMap keeps iteration — and therefore
    /// report bodies — deterministic.
    #[serde(default)]
    pub emotions: BTreeMap<String, EmotionSignal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToneAssessment {
    pub tone_type: String,
    #[serde(default)]
    pub suspicious_tactics: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmotionSignal {
    /// 0-1 fraction.
    pub intensity: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Sensitive information the caller tried to extract.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityAnalysis {
    #[serde(default)]
    pub severity: Option<EntitySeverity>,
    /// 0-100; absent means no extraction risk was measured.
    #[serde(default)]
    pub information_extraction_risk: Option<f64>,
    #[serde(default)]
    pub entities: Option<Vec<String>>,
    /// Opaque payloads — only their counts are ever displayed.
    #[serde(default)]
    pub phone_numbers: Vec<serde_json::Value>,
    #[serde(default)]
    pub account_numbers: Vec<serde_json::Value>,
    #[serde(default)]
    pub suspicious_commands: Vec<SuspiciousCommand>,
}

/// Severity of the information-extraction attempt. Absent defaults to Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntitySeverity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl EntitySeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntitySeverity::Low => "LOW",
            EntitySeverity::Medium => "MEDIUM",
            EntitySeverity::High => "HIGH",
            EntitySeverity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for EntitySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An action the caller instructed the victim to take.
#[derive(Debug, Clone, Deserialize)]
pub struct SuspiciousCommand {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}
