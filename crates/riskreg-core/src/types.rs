//! Core domain types for the risk register.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Identity ──────────────────────────────────────────────────────

/// Unique identifier for a risk record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiskId(pub Uuid);

impl RiskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RiskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RiskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RiskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ── Level ─────────────────────────────────────────────────────────

/// Qualitative risk band derived from the score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(format!(
                "Invalid level: {s}. Choose: low, medium, high, critical"
            )),
        }
    }
}

// ── Entity ────────────────────────────────────────────────────────

/// A persisted risk record.
///
/// `score` and `level` are denormalized caches of `likelihood * severity`
/// and its band. The repository service is the only writer of these two
/// fields, and always writes them together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Risk {
    pub id: RiskId,
    /// What could cause harm.
    pub hazard: String,
    /// How probable the hazard is, 1–5.
    pub likelihood: u8,
    /// How serious the harm would be, 1–5.
    pub severity: u8,
    /// `likelihood * severity`, 1–25.
    pub score: u8,
    /// Band derived from `score`.
    pub level: RiskLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a risk. Score and level are derived, never supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRisk {
    pub hazard: String,
    pub likelihood: u8,
    pub severity: u8,
}

/// Partial update payload. Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskPatch {
    pub hazard: Option<String>,
    pub likelihood: Option<u8>,
    pub severity: Option<u8>,
}

impl RiskPatch {
    /// Whether applying this patch requires rederiving score and level.
    pub fn touches_rating(&self) -> bool {
        self.likelihood.is_some() || self.severity.is_some()
    }
}
