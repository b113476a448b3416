//! Rating argument parsing: numerals or vocabulary labels.

use riskreg_core::scoring::{label_to_likelihood, label_to_severity};

/// Parse a likelihood argument: a numeral 1–5 or a vocabulary label
/// (e.g. "Remote").
pub fn parse_likelihood(arg: &str) -> anyhow::Result<u8> {
    parse_rating(arg, label_to_likelihood, "likelihood")
}

/// Parse a severity argument: a numeral 1–5 or a vocabulary label
/// (e.g. "Minor injury").
pub fn parse_severity(arg: &str) -> anyhow::Result<u8> {
    parse_rating(arg, label_to_severity, "severity")
}

fn parse_rating(arg: &str, lookup: fn(&str) -> Option<u8>, field: &str) -> anyhow::Result<u8> {
    if let Ok(value) = arg.parse::<u8>() {
        if (1..=5).contains(&value) {
            return Ok(value);
        }
        anyhow::bail!("{field} must be between 1 and 5, got {value}");
    }

    lookup(arg).ok_or_else(|| anyhow::anyhow!("Unknown {field} label: {arg}"))
}
