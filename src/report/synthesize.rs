// Section synthesis — builds the ordered report from a normalized record
// and its risk assessment.
//
// Section order is fixed: Case Summary, Call Info, Transcription, Detected
// Patterns, then the conditional sections (Risk Timeline, Known Campaign
// Match, Voice Characteristics, Emotional Summary, Entity Extraction), then
// Recommendation and the Privacy Notice. A conditional section whose input
// is absent keeps its slot with visible=false and an empty body.
//
// Given the same inputs, bodies are byte-identical; only the report id and
// generation timestamp vary per invocation.

use chrono::{DateTime, Local};
use rand::distr::{Alphanumeric, SampleString};
use std::fmt::Write as _;

use crate::analysis::normalize::NormalizedResult;
use crate::report::{language_name, Report, ReportSection};
use crate::scoring::tier::RiskAssessment;

pub const NO_PATTERNS_SENTENCE: &str = "No specific social engineering patterns detected.";
pub const NO_TRANSCRIPTION_PLACEHOLDER: &str = "(No transcription available)";
const PRIVACY_NOTICE: &str = "This report is generated locally and does not \
                              include the original audio file to protect privacy.";
const COMMAND_DISPLAY_CAP: usize = 5;

/// Synthesize a report with a fresh identifier and the current local time.
pub fn synthesize(normalized: &NormalizedResult, assessment: &RiskAssessment) -> Report {
    synthesize_at(normalized, assessment, generate_report_id(), Local::now())
}

/// Deterministic synthesis core — id and timestamp are supplied by the
/// caller, everything else is a pure function of the inputs.
pub fn synthesize_at(
    normalized: &NormalizedResult,
    assessment: &RiskAssessment,
    report_id: String,
    generated_at: DateTime<Local>,
) -> Report {
    let mut sections = Vec::with_capacity(11);

    let mut push = |heading: &str, body: Option<String>| {
        let visible = body.is_some();
        sections.push(ReportSection {
            heading: heading.to_string(),
            body: body.unwrap_or_default(),
            visible,
        });
    };

    push(
        "Case Summary",
        Some(case_summary(normalized, assessment, &report_id, generated_at)),
    );
    push("Call Info", Some(call_info(normalized)));
    push("Transcription", Some(transcription(normalized)));
    push("Detected Patterns", Some(detected_patterns(normalized)));
    push("Risk Timeline", risk_timeline(normalized));
    push("Known Campaign Match", campaign_match(normalized));
    push("Voice Characteristics", voice_characteristics(normalized));
    push("Emotional Summary", emotional_summary(normalized));
    push("Entity Extraction", entity_extraction(normalized));
    push("Recommendation", Some(recommendation(assessment)));
    push("Privacy Notice", Some(PRIVACY_NOTICE.to_string()));

    Report {
        report_id,
        generated_at,
        sections,
    }
}

/// 8-character uppercase alphanumeric token, unique per invocation.
fn generate_report_id() -> String {
    Alphanumeric
        .sample_string(&mut rand::rng(), 8)
        .to_uppercase()
}

fn case_summary(
    normalized: &NormalizedResult,
    assessment: &RiskAssessment,
    report_id: &str,
    generated_at: DateTime<Local>,
) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "Report ID:      #{report_id}");
    let _ = writeln!(body, "Generated:      {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(body, "Risk Score:     {}/100", normalized.risk_score);
    let _ = writeln!(body, "Risk Tier:      {}", assessment.label);
    let _ = writeln!(body, "Primary Threat: {}", normalized.primary_threat);
    let _ = write!(body, "Confidence:     {:.1}%", normalized.confidence_pct);
    body
}

fn call_info(normalized: &NormalizedResult) -> String {
    let language = match &normalized.language_code {
        Some(code) => format!("{} (ISO: {code})", language_name(code)),
        None => "Unknown".to_string(),
    };
    format!(
        "Duration:       {:.2}s\nLanguage:       {language}",
        normalized.call_duration_seconds
    )
}

fn transcription(normalized: &NormalizedResult) -> String {
    normalized
        .transcription
        .clone()
        .unwrap_or_else(|| NO_TRANSCRIPTION_PLACEHOLDER.to_string())
}

fn detected_patterns(normalized: &NormalizedResult) -> String {
    if normalized.patterns.is_empty() {
        return NO_PATTERNS_SENTENCE.to_string();
    }
    let mut body = String::new();
    for (i, pattern) in normalized.patterns.iter().enumerate() {
        if i > 0 {
            body.push('\n');
        }
        let _ = writeln!(body, "[{}] {}", i + 1, pattern.pattern_name);
        let _ = writeln!(body, "    Impact:   +{} risk points", pattern.risk_contribution);
        let _ = writeln!(body, "    Evidence: {}", pattern.keywords.join(", "));
        let _ = writeln!(body, "    Analysis: {}", pattern.explanation);
    }
    body.pop();
    body
}

fn risk_timeline(normalized: &NormalizedResult) -> Option<String> {
    let timeline = normalized.timeline.as_ref()?;
    if timeline.is_empty() {
        return None;
    }
    // Producer order, even if timestamps are out of sequence.
    let lines: Vec<String> = timeline
        .iter()
        .map(|point| {
            format!(
                "{}s - risk {}/100 - {}",
                point.timestamp, point.risk_score, point.reason
            )
        })
        .collect();
    Some(lines.join("\n"))
}

fn campaign_match(normalized: &NormalizedResult) -> Option<String> {
    let campaign = normalized.campaign.as_ref()?;
    let mut body = String::new();
    let _ = writeln!(body, "Campaign:         {}", campaign.campaign_name);
    let _ = writeln!(body, "Severity:         {}", campaign.severity);
    let _ = writeln!(body, "Match Confidence: {:.1}%", campaign.match_confidence_pct);
    let _ = writeln!(body, "Description:      {}", campaign.description);
    let _ = write!(body, "Average Loss:     {}", campaign.loss_average);
    if !campaign.typical_targets.is_empty() {
        let _ = write!(body, "\nTypical Targets:  {}", campaign.typical_targets.join(", "));
    }
    if !campaign.matched_keywords.is_empty() {
        let _ = write!(body, "\nMatched Keywords: {}", campaign.matched_keywords.join(", "));
    }
    Some(body)
}

fn voice_characteristics(normalized: &NormalizedResult) -> Option<String> {
    let voice = normalized.voice.as_ref()?;
    let mut body = String::new();
    let _ = writeln!(body, "Speaking Rate:   {:.1}%", voice.speaking_rate_pct);
    let _ = writeln!(body, "Pitch Variation: {:.1}%", voice.pitch_variation_pct);
    let _ = writeln!(body, "Silence Ratio:   {:.1}%", voice.silence_ratio_pct);
    let _ = writeln!(body, "Noise Level:     {:.1}%", voice.noise_level_pct);
    let _ = write!(body, "Quality Score:   {:.1}/100", voice.quality_score);
    if voice.risk_indicators.is_empty() {
        let _ = write!(body, "\nRisk Indicators: none detected");
    } else {
        let _ = write!(body, "\nRisk Indicators:");
        for indicator in &voice.risk_indicators {
            let _ = write!(body, "\n  - {indicator}");
        }
    }
    Some(body)
}

fn emotional_summary(normalized: &NormalizedResult) -> Option<String> {
    let emotional = normalized.emotional.as_ref()?;
    let mut body = String::new();
    let _ = writeln!(body, "Manipulation Risk: {:.1}/100", emotional.manipulation_risk_pct);
    let _ = writeln!(body, "Tone:              {}", emotional.tone_type.as_deref().unwrap_or("N/A"));
    let _ = write!(body, "Tactics:           {}", emotional.tactics);
    if emotional.emotions.is_empty() {
        let _ = write!(body, "\nDetected Emotions: none");
    } else {
        let _ = write!(body, "\nDetected Emotions:");
        for emotion in &emotional.emotions {
            let _ = write!(
                body,
                "\n  {}: intensity {:.0}%",
                capitalize(&emotion.name),
                emotion.intensity_pct
            );
            if !emotion.keywords.is_empty() {
                let _ = write!(body, ", keywords: {}", emotion.keywords.join(", "));
            }
        }
    }
    Some(body)
}

fn entity_extraction(normalized: &NormalizedResult) -> Option<String> {
    let entities = normalized.entities.as_ref()?;
    let targeted = if entities.entities.is_empty() {
        "None specific".to_string()
    } else {
        entities.entities.join(", ")
    };
    let mut body = String::new();
    let _ = writeln!(body, "Severity:          {}", entities.severity);
    let _ = writeln!(body, "Extraction Risk:   {:.1}/100", entities.extraction_risk);
    let _ = writeln!(body, "Targeted Entities: {targeted}");
    let _ = writeln!(body, "Phone Numbers:     {}", entities.phone_count);
    let _ = write!(body, "Accounts/Cards:    {}", entities.account_count);
    if entities.suspicious_commands.is_empty() {
        let _ = write!(body, "\nSuspicious Commands: none detected");
    } else {
        let _ = write!(body, "\nSuspicious Commands:");
        for command in entities.suspicious_commands.iter().take(COMMAND_DISPLAY_CAP) {
            let _ = write!(
                body,
                "\n  {}: {}",
                command.kind.to_uppercase().replace('_', " "),
                command.value
            );
        }
    }
    Some(body)
}

fn recommendation(assessment: &RiskAssessment) -> String {
    format!(
        "{}\n\n{}",
        assessment.recommendation_title, assessment.recommendation_body
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
