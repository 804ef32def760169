// Colored terminal output for synthesized reports.
//
// This module handles all terminal-specific formatting; the flat export
// stays plain. Hidden sections are skipped the same way the display
// contract tells a UI to hide their cards.

use colored::{ColoredString, Colorize};

use crate::report::{truncate_chars, Report};
use crate::scoring::tier::{ColorToken, RiskAssessment};

const TRANSCRIPTION_PREVIEW_CHARS: usize = 600;

/// Display a full report in the terminal.
pub fn display_report(report: &Report, assessment: &RiskAssessment) {
    println!("\n{}", "=== Call Risk Report ===".bold());
    println!("  Assessment: {}", paint(assessment.label, assessment.color).bold());

    for section in report.visible_sections() {
        println!("\n{}", section.heading.bold());

        // Long transcripts get a preview in the terminal; the export
        // always carries the full text.
        let body = if section.heading == "Transcription" {
            truncate_chars(&section.body, TRANSCRIPTION_PREVIEW_CHARS)
        } else {
            section.body.clone()
        };

        for line in body.lines() {
            if section.heading == "Recommendation" {
                println!("  {}", paint(line, assessment.color));
            } else {
                println!("  {line}");
            }
        }
    }
    println!();
}

/// Map a color token to terminal coloring.
pub fn paint(text: &str, token: ColorToken) -> ColoredString {
    match token {
        ColorToken::Critical => text.red().bold(),
        ColorToken::Danger => text.bright_red(),
        ColorToken::Warning => text.yellow(),
        ColorToken::Caution => text.bright_yellow(),
        ColorToken::Success => text.green(),
    }
}
