//! Likelihood×severity matrix summary.

use riskreg_core::scoring::{compute_level, compute_score};
use riskreg_core::{Risk, RiskLevel};

/// One cell of the 5×5 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCell {
    pub likelihood: u8,
    pub severity: u8,
    pub score: u8,
    pub level: RiskLevel,
    /// Number of register entries at exactly this (likelihood, severity).
    pub count: usize,
}

/// Build the full 5×5 grid, rows indexed by likelihood, columns by severity.
pub fn build_matrix(risks: &[Risk]) -> [[MatrixCell; 5]; 5] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let likelihood = (row + 1) as u8;
            let severity = (col + 1) as u8;
            let score = compute_score(likelihood, severity);
            MatrixCell {
                likelihood,
                severity,
                score,
                level: compute_level(score),
                count: risks
                    .iter()
                    .filter(|r| r.likelihood == likelihood && r.severity == severity)
                    .count(),
            }
        })
    })
}

/// Render the matrix as a plain-text table. Cells show the score and, when
/// nonzero, the entry count in parentheses.
pub fn render_matrix(risks: &[Risk]) -> String {
    let matrix = build_matrix(risks);
    let mut out = String::new();

    out.push_str("L\\S      S1       S2       S3       S4       S5\n");
    for row in &matrix {
        out.push_str(&format!("L{} ", row[0].likelihood));
        for cell in row {
            let body = if cell.count > 0 {
                format!("{} ({})", cell.score, cell.count)
            } else {
                cell.score.to_string()
            };
            out.push_str(&format!("{:>9}", body));
        }
        out.push('\n');
    }

    out
}
