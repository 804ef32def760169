// Composition tests — the full pipeline from raw backend JSON through
// normalize -> classify -> synthesize -> export, with no network and no
// filesystem side effects.

use callwarden::analysis::model::AnalysisResult;
use callwarden::analysis::normalize::normalize;
use callwarden::report::synthesize::{synthesize, NO_PATTERNS_SENTENCE};
use callwarden::report::{export, Report};
use callwarden::scoring::tier::{classify, manipulation_color, ColorToken, RiskAssessment, RiskTier};

fn run_pipeline(json: &str) -> (Report, RiskAssessment) {
    let raw: AnalysisResult = serde_json::from_str(json).expect("backend JSON should parse");
    let normalized = normalize(&raw);
    let assessment = classify(normalized.risk_score);
    let report = synthesize(&normalized, &assessment);
    (report, assessment)
}

// ============================================================
// Scenario A: critical score, no patterns
// ============================================================

#[test]
fn critical_record_without_patterns() {
    let (report, assessment) = run_pipeline(
        r#"{
            "risk_score": 95,
            "risk_level": "CRITICAL_SCAM",
            "primary_threat": "Authority impersonation",
            "confidence": 0.91,
            "call_duration_seconds": 42.3,
            "explanation": "Certain fraud indicators.",
            "detected_patterns": []
        }"#,
    );

    assert_eq!(assessment.tier, RiskTier::Critical);
    assert!(assessment.recommendation_title.contains("HANG UP"));
    assert_eq!(
        report.section("Detected Patterns").unwrap().body,
        NO_PATTERNS_SENTENCE
    );

    let text = export::render_flat(&report);
    assert!(text.contains("Risk Score:     95/100"));
    assert!(text.contains("Confidence:     91.0%"));
    assert!(text.contains("Duration:       42.30s"));
    assert!(text.contains("HANG UP IMMEDIATELY"));
}

// ============================================================
// Scenario B: ambiguous manipulation scale
// ============================================================

#[test]
fn fraction_and_percent_manipulation_render_identically() {
    let fraction = r#"{
        "risk_score": 60,
        "risk_level": "MEDIUM_RISK",
        "primary_threat": "Emotional pressure",
        "confidence": 0.8,
        "call_duration_seconds": 30,
        "explanation": "Manipulation detected.",
        "detected_patterns": [],
        "emotional_analysis": {"manipulation_risk": 0.81}
    }"#;
    let percent = fraction.replace("0.81", "81");

    let (report_a, _) = run_pipeline(fraction);
    let (report_b, _) = run_pipeline(&percent);

    let body_a = &report_a.section("Emotional Summary").unwrap().body;
    let body_b = &report_b.section("Emotional Summary").unwrap().body;
    assert_eq!(body_a, body_b);
    assert!(body_a.contains("81.0/100"));
    assert_eq!(manipulation_color(81.0), ColorToken::Danger);
}

// ============================================================
// Scenario C: voice section with an error marker
// ============================================================

#[test]
fn voice_error_suppresses_section_in_display_and_export() {
    let (report, _) = run_pipeline(
        r#"{
            "risk_score": 40,
            "risk_level": "LOW_MEDIUM_RISK",
            "primary_threat": "Minor anomalies",
            "confidence": 0.7,
            "call_duration_seconds": 15,
            "explanation": "Low signal.",
            "detected_patterns": [],
            "voice_analysis": {
                "error": "decode failed",
                "speaking_rate": 0.6,
                "pitch_variation": 0.4,
                "silence_ratio": 0.2,
                "noise_level": 0.1,
                "voice_quality_score": 85.0,
                "risk_indicators": ["robotic cadence"]
            }
        }"#,
    );

    let slot = report.section("Voice Characteristics").unwrap();
    assert!(!slot.visible);
    assert!(slot.body.is_empty());
    assert!(!export::render_flat(&report).contains("VOICE CHARACTERISTICS"));
}

// ============================================================
// Full-record walkthrough
// ============================================================

#[test]
fn fully_populated_record_renders_every_section() {
    let (report, assessment) = run_pipeline(
        r#"{
            "risk_score": 88,
            "risk_level": "HIGH_RISK",
            "primary_threat": "Digital arrest impersonation",
            "confidence": 0.93,
            "call_duration_seconds": 184.2,
            "language_detected": "en",
            "transcription": "this is the cybercrime cell, your account is frozen",
            "explanation": "Authority impersonation with urgency.",
            "detected_patterns": [
                {"pattern_name": "Authority Impersonation",
                 "keywords": ["cybercrime", "police"],
                 "explanation": "Claims to be law enforcement.",
                 "risk_contribution": 30},
                {"pattern_name": "Urgency",
                 "keywords": ["immediately"],
                 "explanation": "Pushes for instant action.",
                 "risk_contribution": 20}
            ],
            "risk_timeline": [
                {"timestamp": 10, "risk_score": 35, "reason": "authority claim"},
                {"timestamp": 95, "risk_score": 82, "reason": "payment demanded"}
            ],
            "known_scam_match": {
                "is_known_scam": true,
                "overall_match_confidence": 0.87,
                "top_match": {
                    "campaign_name": "Digital Arrest Scam",
                    "severity": "CRITICAL",
                    "description": "Fake police detention threats over video calls.",
                    "loss_average": "Rs 3.5 lakh",
                    "typical_targets": ["senior citizens"],
                    "matched_keywords": ["arrest", "cybercrime", "verification"]
                }
            },
            "voice_analysis": {
                "speaking_rate": 0.72,
                "pitch_variation": 0.31,
                "silence_ratio": 0.08,
                "noise_level": 0.12,
                "voice_quality_score": 64.5,
                "risk_indicators": ["scripted delivery"]
            },
            "emotional_analysis": {
                "manipulation_risk": 0.76,
                "tone_assessment": {
                    "tone_type": "threatening",
                    "suspicious_tactics": "fear induction, false authority"
                },
                "emotions": {
                    "fear": {"intensity": 0.8, "keywords": ["arrest", "frozen"]},
                    "urgency": {"intensity": 0.6, "keywords": ["immediately"]}
                }
            },
            "entity_analysis": {
                "severity": "HIGH",
                "information_extraction_risk": 67.0,
                "entities": ["bank account", "aadhaar number"],
                "phone_numbers": ["+91-9999999999"],
                "account_numbers": [],
                "suspicious_commands": [
                    {"type": "money_transfer", "value": "transfer the security deposit"}
                ]
            }
        }"#,
    );

    assert_eq!(assessment.tier, RiskTier::High);
    assert_eq!(report.visible_sections().count(), report.sections.len());

    let text = export::render_flat(&report);
    assert!(text.contains("KNOWN CAMPAIGN MATCH"));
    assert!(text.contains("Digital Arrest Scam"));
    assert!(text.contains("Match Confidence: 87.0%"));
    assert!(text.contains("Speaking Rate:   72.0%"));
    assert!(text.contains("Manipulation Risk: 76.0/100"));
    assert!(text.contains("Tactics:           fear induction, false authority"));
    assert!(text.contains("Fear: intensity 80%"));
    assert!(text.contains("Targeted Entities: bank account, aadhaar number"));
    assert!(text.contains("Phone Numbers:     1"));
    assert!(text.contains("MONEY TRANSFER: transfer the security deposit"));
    assert!(text.contains("10s - risk 35/100 - authority claim"));
    assert!(text.contains("HIGH RISK: END CALL"));
}

// ============================================================
// Re-running the pipeline is stable
// ============================================================

#[test]
fn pipeline_reruns_produce_identical_bodies() {
    let json = r#"{
        "risk_score": 55,
        "risk_level": "MEDIUM_RISK",
        "primary_threat": "Mixed signals",
        "confidence": 0.75,
        "call_duration_seconds": 20,
        "explanation": "Some suspicious patterns.",
        "detected_patterns": []
    }"#;

    let (first, _) = run_pipeline(json);
    let (second, _) = run_pipeline(json);
    for (a, b) in first.sections.iter().zip(second.sections.iter()) {
        if a.heading != "Case Summary" {
            assert_eq!(a.body, b.body);
        }
    }
}
