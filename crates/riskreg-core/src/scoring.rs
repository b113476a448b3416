//! Scoring engine: score and level derivation plus the rating vocabulary.
//!
//! `score = likelihood × severity`, banded into Low/Medium/High/Critical
//! at fixed inclusive thresholds. All functions are pure; safe to call
//! concurrently without coordination.

use crate::types::RiskLevel;

/// Highest score still classified Low.
pub const LOW_MAX: u8 = 4;
/// Highest score still classified Medium.
pub const MEDIUM_MAX: u8 = 9;
/// Highest score still classified High; everything above is Critical.
pub const HIGH_MAX: u8 = 16;

/// Compute the risk score from likelihood and severity ratings.
///
/// Total for ratings in 1–5. Out-of-range inputs are the caller's bug;
/// values are multiplied as given, never clamped.
pub fn compute_score(likelihood: u8, severity: u8) -> u8 {
    likelihood * severity
}

/// Classify a score into its qualitative band.
pub fn compute_level(score: u8) -> RiskLevel {
    if score <= LOW_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_MAX {
        RiskLevel::Medium
    } else if score <= HIGH_MAX {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

// ── Rating vocabulary ─────────────────────────────────────────────

/// One entry in the rating vocabulary: a human label for a numeric bucket,
/// grouped into a presentation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingOption {
    pub label: &'static str,
    pub value: u8,
    pub group: &'static str,
}

/// Likelihood vocabulary. Several labels share a numeric bucket.
pub const LIKELIHOOD_OPTIONS: [RatingOption; 9] = [
    RatingOption { label: "Impossible", value: 1, group: "Rare" },
    RatingOption { label: "Remote", value: 2, group: "Rare" },
    RatingOption { label: "Unlikely", value: 2, group: "Rare" },
    RatingOption { label: "Possible", value: 3, group: "Occasional" },
    RatingOption { label: "Unusual", value: 3, group: "Occasional" },
    RatingOption { label: "Known", value: 4, group: "Occasional" },
    RatingOption { label: "Likely", value: 4, group: "Frequent" },
    RatingOption { label: "Usual", value: 5, group: "Frequent" },
    RatingOption { label: "Certain", value: 5, group: "Frequent" },
];

/// Severity vocabulary. Several labels share a numeric bucket.
pub const SEVERITY_OPTIONS: [RatingOption; 9] = [
    RatingOption { label: "Insignificant", value: 1, group: "Slight" },
    RatingOption { label: "Minor incident", value: 2, group: "Slight" },
    RatingOption { label: "Minor injury", value: 2, group: "Slight" },
    RatingOption { label: "Health damage", value: 3, group: "Moderate" },
    RatingOption { label: "Injury", value: 3, group: "Moderate" },
    RatingOption { label: "Multiple injuries", value: 4, group: "Moderate" },
    RatingOption { label: "Serious injury", value: 4, group: "Extreme" },
    RatingOption { label: "Fatal", value: 5, group: "Extreme" },
    RatingOption { label: "Multiple fatalities", value: 5, group: "Extreme" },
];

/// Resolve a likelihood label to its numeric rating. `None` for labels
/// outside the vocabulary; callers supply their own fallback.
pub fn label_to_likelihood(label: &str) -> Option<u8> {
    LIKELIHOOD_OPTIONS
        .iter()
        .find(|opt| opt.label == label)
        .map(|opt| opt.value)
}

/// Resolve a severity label to its numeric rating.
pub fn label_to_severity(label: &str) -> Option<u8> {
    SEVERITY_OPTIONS
        .iter()
        .find(|opt| opt.label == label)
        .map(|opt| opt.value)
}

/// Fallback likelihood when no selection has been made ("Impossible").
pub fn default_likelihood() -> u8 {
    1
}

/// Fallback severity when no selection has been made ("Insignificant").
pub fn default_severity() -> u8 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_product_over_full_grid() {
        for likelihood in 1..=5u8 {
            for severity in 1..=5u8 {
                assert_eq!(
                    compute_score(likelihood, severity),
                    likelihood * severity,
                    "score mismatch at ({likelihood}, {severity})"
                );
            }
        }
        assert_eq!(compute_score(1, 1), 1);
        assert_eq!(compute_score(5, 5), 25);
    }

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(compute_level(LOW_MAX), RiskLevel::Low);
        assert_eq!(compute_level(LOW_MAX + 1), RiskLevel::Medium);
        assert_eq!(compute_level(MEDIUM_MAX), RiskLevel::Medium);
        assert_eq!(compute_level(MEDIUM_MAX + 1), RiskLevel::High);
        assert_eq!(compute_level(HIGH_MAX), RiskLevel::High);
        assert_eq!(compute_level(HIGH_MAX + 1), RiskLevel::Critical);
    }

    #[test]
    fn level_extremes() {
        assert_eq!(compute_level(1), RiskLevel::Low);
        assert_eq!(compute_level(25), RiskLevel::Critical);
    }

    #[test]
    fn duplicate_labels_share_a_bucket() {
        assert_eq!(label_to_likelihood("Unlikely"), Some(2));
        assert_eq!(label_to_likelihood("Remote"), Some(2));
        assert_eq!(label_to_severity("Fatal"), Some(5));
        assert_eq!(label_to_severity("Multiple fatalities"), Some(5));
    }

    #[test]
    fn unknown_label_is_absent_not_an_error() {
        assert_eq!(label_to_likelihood("no-such-label"), None);
        assert_eq!(label_to_severity("no-such-label"), None);
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(label_to_likelihood("unlikely"), None);
        assert_eq!(label_to_severity("Minor"), None);
    }

    #[test]
    fn defaults_are_lowest_bucket() {
        assert_eq!(default_likelihood(), 1);
        assert_eq!(default_severity(), 1);
        assert_eq!(label_to_likelihood("Impossible"), Some(default_likelihood()));
        assert_eq!(label_to_severity("Insignificant"), Some(default_severity()));
    }

    #[test]
    fn vocabulary_values_stay_in_range() {
        for opt in LIKELIHOOD_OPTIONS.iter().chain(SEVERITY_OPTIONS.iter()) {
            assert!((1..=5).contains(&opt.value), "{} out of range", opt.label);
        }
    }
}
