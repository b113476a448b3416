//! Risk storage — trait + JSON file-backed implementation.
//!
//! Each risk is a single JSON file named `{id}.json` under the store root.
//! Listing reads the whole directory, filters in memory, and sorts by
//! score descending with created_at (then id) as the tie-break so results
//! are deterministic across runs.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use riskreg_core::{Risk, RiskId, RiskLevel};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Risk not found: {0}")]
    NotFound(RiskId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Query parameters for listing risks.
#[derive(Debug, Default, Clone)]
pub struct RiskQuery {
    /// Case-insensitive substring match on the hazard text.
    pub hazard_contains: Option<String>,
    /// Exact level match.
    pub level: Option<RiskLevel>,
}

/// Field values for a new record. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct RiskData {
    pub hazard: String,
    pub likelihood: u8,
    pub severity: u8,
    pub score: u8,
    pub level: RiskLevel,
}

/// Write payload for an update. Absent fields leave the stored value
/// untouched; the store bumps `updated_at` on every write.
#[derive(Debug, Clone, Default)]
pub struct RiskUpdate {
    pub hazard: Option<String>,
    pub likelihood: Option<u8>,
    pub severity: Option<u8>,
    pub score: Option<u8>,
    pub level: Option<RiskLevel>,
}

/// Trait for risk persistence backends.
pub trait RiskStore {
    /// Persist a new record, assigning id and timestamps. Returns the
    /// record as stored.
    fn create(&self, data: RiskData) -> Result<Risk, StoreError>;

    /// Retrieve a record by id. A miss is `None`, not an error.
    fn find(&self, id: RiskId) -> Result<Option<Risk>, StoreError>;

    /// List records matching the query, ordered by score descending
    /// (created_at ascending, then id, among equal scores).
    fn find_many(&self, query: &RiskQuery) -> Result<Vec<Risk>, StoreError>;

    /// Apply the present fields of `changes` to an existing record.
    /// Fails with `NotFound` if the id is absent.
    fn update(&self, id: RiskId, changes: RiskUpdate) -> Result<Risk, StoreError>;

    /// Remove a record. Fails with `NotFound` if nothing was deleted.
    fn delete(&self, id: RiskId) -> Result<(), StoreError>;
}

/// File-system backed risk store.
///
/// ```text
/// {root}/
///   {id}.json
///   {id}.json
/// ```
pub struct JsonRiskStore {
    root: PathBuf,
}

impl JsonRiskStore {
    /// Create a new store rooted at the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn risk_path(&self, id: RiskId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn read_risk(&self, path: &Path) -> Result<Risk, StoreError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write_risk(&self, risk: &Risk) -> Result<(), StoreError> {
        let path = self.risk_path(risk.id);
        let json = serde_json::to_string_pretty(risk)?;
        fs::write(&path, json)?;

        tracing::debug!(
            risk_id = %risk.id,
            path = %path.display(),
            "Risk written"
        );

        Ok(())
    }
}

impl RiskStore for JsonRiskStore {
    fn create(&self, data: RiskData) -> Result<Risk, StoreError> {
        let now = Utc::now();
        let risk = Risk {
            id: RiskId::new(),
            hazard: data.hazard,
            likelihood: data.likelihood,
            severity: data.severity,
            score: data.score,
            level: data.level,
            created_at: now,
            updated_at: now,
        };

        self.write_risk(&risk)?;
        Ok(risk)
    }

    fn find(&self, id: RiskId) -> Result<Option<Risk>, StoreError> {
        let path = self.risk_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_risk(&path)?))
    }

    fn find_many(&self, query: &RiskQuery) -> Result<Vec<Risk>, StoreError> {
        let mut results = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let risk = self.read_risk(&path)?;
            if matches_query(&risk, query) {
                results.push(risk);
            }
        }

        // Score descending; created_at then id keep equal scores stable.
        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(results)
    }

    fn update(&self, id: RiskId, changes: RiskUpdate) -> Result<Risk, StoreError> {
        let mut risk = self.find(id)?.ok_or(StoreError::NotFound(id))?;

        if let Some(hazard) = changes.hazard {
            risk.hazard = hazard;
        }
        if let Some(likelihood) = changes.likelihood {
            risk.likelihood = likelihood;
        }
        if let Some(severity) = changes.severity {
            risk.severity = severity;
        }
        if let Some(score) = changes.score {
            risk.score = score;
        }
        if let Some(level) = changes.level {
            risk.level = level;
        }
        risk.updated_at = Utc::now();

        self.write_risk(&risk)?;
        Ok(risk)
    }

    fn delete(&self, id: RiskId) -> Result<(), StoreError> {
        let path = self.risk_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        fs::remove_file(&path)?;

        tracing::debug!(risk_id = %id, "Risk deleted");
        Ok(())
    }
}

/// Check whether a risk matches the given query filters.
fn matches_query(risk: &Risk, query: &RiskQuery) -> bool {
    if let Some(needle) = &query.hazard_contains {
        if !needle.is_empty()
            && !risk.hazard.to_lowercase().contains(&needle.to_lowercase())
        {
            return false;
        }
    }
    if let Some(level) = &query.level {
        if &risk.level != level {
            return false;
        }
    }
    true
}
