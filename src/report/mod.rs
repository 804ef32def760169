// Report assembly and rendering — section synthesis, flat export, and
// terminal display.

pub mod export;
pub mod synthesize;
pub mod terminal;

use chrono::{DateTime, Local};
use serde::Serialize;

/// One named, independently hideable unit of the report.
///
/// Hidden sections stay in the list so the display layer knows about the
/// slot (and hides its card); the flat export skips them entirely.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub heading: String,
    pub body: String,
    pub visible: bool,
}

/// A complete synthesized report: ordered sections plus the per-invocation
/// identifier and generation timestamp.
#[derive(Debug, Clone)]
pub struct Report {
    pub report_id: String,
    pub generated_at: DateTime<Local>,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Sections that actually render — the exported view.
    pub fn visible_sections(&self) -> impl Iterator<Item = &ReportSection> {
        self.sections.iter().filter(|s| s.visible)
    }

    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

/// Static ISO-code lookup for the languages the backend detects. Unknown
/// codes fall back to the raw code string.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("ml", "Malayalam"),
    ("kn", "Kannada"),
    ("bn", "Bengali"),
    ("gu", "Gujarati"),
    ("es", "Spanish"),
    ("fr", "French"),
];

pub fn language_name(code: &str) -> &str {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
