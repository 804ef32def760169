// Normalization — one pass that turns the backend's heterogeneous record
// into a single canonical shape.
//
// Everything downstream (classifier, reporter) reads NormalizedResult only.
// The raw record is never mutated; display values live here. Absent optional
// sections stay absent, and a voice section carrying an error marker is
// treated as absent outright.

use crate::analysis::model::{
    AnalysisResult, EmotionalAnalysis, EntityAnalysis, EntitySeverity, KnownScamMatch, Pattern,
    SuspiciousCommand, TimelinePoint, VoiceAnalysis,
};

/// An AnalysisResult after scale unification and optional-field defaulting.
#[derive(Debug, Clone)]
pub struct NormalizedResult {
    pub risk_score: f64,
    pub risk_level: String,
    pub primary_threat: String,
    /// 0-100 display value.
    pub confidence_pct: f64,
    pub call_duration_seconds: f64,
    pub language_code: Option<String>,
    pub transcription: Option<String>,
    pub explanation: String,
    /// Original producer order — never re-sorted by contribution.
    pub patterns: Vec<Pattern>,
    pub timeline: Option<Vec<TimelinePoint>>,
    pub campaign: Option<CampaignSummary>,
    pub voice: Option<VoiceProfile>,
    pub emotional: Option<EmotionalProfile>,
    pub entities: Option<EntityProfile>,
}

/// A confirmed known-campaign match, confidence already rescaled.
#[derive(Debug, Clone)]
pub struct CampaignSummary {
    pub campaign_name: String,
    pub severity: String,
    pub description: String,
    pub loss_average: String,
    pub typical_targets: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub match_confidence_pct: f64,
}

/// Voice-biometric signals with all fractions rescaled to 0-100.
#[derive(Debug, Clone)]
pub struct VoiceProfile {
    pub speaking_rate_pct: f64,
    pub pitch_variation_pct: f64,
    pub silence_ratio_pct: f64,
    pub noise_level_pct: f64,
    pub quality_score: f64,
    pub risk_indicators: Vec<String>,
}

/// Emotional signals with the manipulation metric unified to 0-100 and the
/// tactics text fully resolved.
#[derive(Debug, Clone)]
pub struct EmotionalProfile {
    pub manipulation_risk_pct: f64,
    pub tone_type: Option<String>,
    pub tactics: String,
    pub emotions: Vec<EmotionEntry>,
}

#[derive(Debug, Clone)]
pub struct EmotionEntry {
    pub name: String,
    pub intensity_pct: f64,
    pub keywords: Vec<String>,
}

/// Entity-extraction signals with defaults applied and counts precomputed.
#[derive(Debug, Clone)]
pub struct EntityProfile {
    pub severity: EntitySeverity,
    pub extraction_risk: f64,
    pub entities: Vec<String>,
    pub phone_count: usize,
    pub account_count: usize,
    pub suspicious_commands: Vec<SuspiciousCommand>,
}

/// Rescale a risk/likelihood metric that may arrive either as a 0-1 fraction
/// or as an already-scaled 0-100 percentage.
///
/// The heuristic lives here and nowhere else: a value at or below 1 is a
/// fraction. Idempotent for values that are already percentages.
pub fn percent_or_fraction(value: f64) -> f64 {
    if value <= 1.0 {
        value * 100.0
    } else {
        value
    }
}

/// Rescale a metric that is always a 0-1 fraction to its 0-100 display value.
pub fn fraction_to_percent(value: f64) -> f64 {
    value * 100.0
}

/// Resolve the manipulation-tactics text.
///
/// Preference order: the tone assessment's tactics summary, then the
/// detected-tactics list joined with ", ", then the literal "None detected".
pub fn resolve_tactics(emotional: &EmotionalAnalysis) -> String {
    if let Some(tone) = &emotional.tone_assessment {
        if let Some(tactics) = &tone.suspicious_tactics {
            if !tactics.is_empty() {
                return tactics.clone();
            }
        }
    }
    if let Some(detected) = &emotional.tactics_detected {
        if !detected.is_empty() {
            return detected.join(", ");
        }
    }
    "None detected".to_string()
}

/// Normalize one analysis record. Total on well-typed input — never fails.
pub fn normalize(raw: &AnalysisResult) -> NormalizedResult {
    NormalizedResult {
        risk_score: raw.risk_score,
        risk_level: raw.risk_level.clone(),
        primary_threat: raw.primary_threat.clone(),
        confidence_pct: fraction_to_percent(raw.confidence),
        call_duration_seconds: raw.call_duration_seconds,
        language_code: raw.language_detected.clone(),
        transcription: raw.transcription.clone(),
        explanation: raw.explanation.clone(),
        patterns: raw.detected_patterns.clone(),
        timeline: raw.risk_timeline.clone(),
        campaign: raw.known_scam_match.as_ref().and_then(normalize_campaign),
        voice: raw.voice_analysis.as_ref().and_then(normalize_voice),
        emotional: raw.emotional_analysis.as_ref().map(normalize_emotional),
        entities: raw.entity_analysis.as_ref().map(normalize_entities),
    }
}

/// A match record that isn't a confirmed match (or lacks campaign details)
/// is suppressed rather than rendered half-empty.
fn normalize_campaign(scam_match: &KnownScamMatch) -> Option<CampaignSummary> {
    if !scam_match.is_known_scam {
        return None;
    }
    let top = scam_match.top_match.as_ref()?;
    Some(CampaignSummary {
        campaign_name: top.campaign_name.clone(),
        severity: top.severity.clone(),
        description: top.description.clone(),
        loss_average: top.loss_average.clone(),
        typical_targets: top.typical_targets.clone(),
        matched_keywords: top.matched_keywords.clone(),
        match_confidence_pct: fraction_to_percent(scam_match.overall_match_confidence),
    })
}

fn normalize_voice(voice: &VoiceAnalysis) -> Option<VoiceProfile> {
    // An error marker invalidates the section even if other fields look sane.
    if voice.error.is_some() {
        return None;
    }
    Some(VoiceProfile {
        speaking_rate_pct: fraction_to_percent(voice.speaking_rate),
        pitch_variation_pct: fraction_to_percent(voice.pitch_variation),
        silence_ratio_pct: fraction_to_percent(voice.silence_ratio),
        noise_level_pct: fraction_to_percent(voice.noise_level),
        quality_score: voice.voice_quality_score,
        risk_indicators: voice.risk_indicators.clone(),
    })
}

fn normalize_emotional(emotional: &EmotionalAnalysis) -> EmotionalProfile {
    EmotionalProfile {
        manipulation_risk_pct: percent_or_fraction(emotional.manipulation_risk),
        tone_type: emotional
            .tone_assessment
            .as_ref()
            .map(|t| t.tone_type.clone()),
        tactics: resolve_tactics(emotional),
        emotions: emotional
            .emotions
            .iter()
            .map(|(name, signal)| EmotionEntry {
                name: name.clone(),
                intensity_pct: fraction_to_percent(signal.intensity),
                keywords: signal.keywords.clone(),
            })
            .collect(),
    }
}

fn normalize_entities(entities: &EntityAnalysis) -> EntityProfile {
    EntityProfile {
        severity: entities.severity.unwrap_or_default(),
        extraction_risk: entities.information_extraction_risk.unwrap_or(0.0),
        entities: entities.entities.clone().unwrap_or_default(),
        phone_count: entities.phone_numbers.len(),
        account_count: entities.account_numbers.len(),
        suspicious_commands: entities.suspicious_commands.clone(),
    }
}
