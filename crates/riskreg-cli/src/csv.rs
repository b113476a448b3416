//! CSV export of the register.

use riskreg_core::Risk;

const HEADERS: [&str; 6] = ["Hazard", "Likelihood", "Severity", "Score", "Level", "CreatedAt"];

/// Render risks as CSV, one row per record, dates rendered date-only.
pub fn risks_to_csv(risks: &[Risk]) -> String {
    let mut lines = vec![HEADERS.join(",")];

    for risk in risks {
        let row = [
            escape_field(&risk.hazard),
            risk.likelihood.to_string(),
            risk.severity.to_string(),
            risk.score.to_string(),
            risk.level.to_string(),
            risk.created_at.format("%Y-%m-%d").to_string(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Quote fields containing commas, quotes, or newlines; embedded quotes
/// are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
