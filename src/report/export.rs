// Flat text export of a synthesized report.
//
// The export contains only visible sections — a suppressed section leaves
// no empty header behind. Output is plain ASCII so the file reads the same
// in any viewer.

use crate::report::Report;

const RULE_WIDTH: usize = 60;

/// Render the report as a single self-contained text document.
pub fn render_flat(report: &Report) -> String {
    let bar = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&bar);
    out.push('\n');
    out.push_str("         CALLWARDEN - CALL RISK ANALYSIS REPORT\n");
    out.push_str(&bar);
    out.push('\n');

    for section in report.visible_sections() {
        out.push('\n');
        out.push_str(&section.heading.to_uppercase());
        out.push('\n');
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&section.body);
        out.push('\n');
    }

    out
}

/// Suggested filename for a report download. The millisecond timestamp
/// keeps names opaque but monotonically ordered across exports.
pub fn suggested_filename(report: &Report) -> String {
    format!("call-analysis-{}.txt", report.generated_at.timestamp_millis())
}
