//! The risk repository service.

use riskreg_core::scoring::{compute_level, compute_score};
use riskreg_core::{NewRisk, Risk, RiskId, RiskLevel, RiskPatch};
use riskreg_store::{RiskData, RiskQuery, RiskStore, RiskUpdate, StoreError};

/// Errors surfaced by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Risk not found: {0}")]
    NotFound(RiskId),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Filter parameters for listing risks.
#[derive(Debug, Default, Clone)]
pub struct ListParams {
    /// Case-insensitive substring to match against the hazard text.
    pub q: Option<String>,
    /// Restrict to an exact level.
    pub level: Option<RiskLevel>,
}

/// CRUD orchestration over an injected record store.
///
/// Every operation is a single logical store transaction. `update` is a
/// read-then-write sequence; under concurrent updates to the same id the
/// last write wins.
pub struct RiskService<S> {
    store: S,
}

impl<S: RiskStore> RiskService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List risks matching the filter, ordered by score descending.
    pub fn list(&self, params: &ListParams) -> Result<Vec<Risk>, ServiceError> {
        let query = RiskQuery {
            hazard_contains: params.q.as_ref().filter(|q| !q.is_empty()).cloned(),
            level: params.level,
        };
        Ok(self.store.find_many(&query)?)
    }

    /// Look up a single risk. A miss is `None`; the caller decides what a
    /// missing record means.
    pub fn get(&self, id: RiskId) -> Result<Option<Risk>, ServiceError> {
        Ok(self.store.find(id)?)
    }

    /// Create a risk with freshly derived score and level.
    pub fn create(&self, input: NewRisk) -> Result<Risk, ServiceError> {
        validate_hazard(&input.hazard)?;
        validate_rating("likelihood", input.likelihood)?;
        validate_rating("severity", input.severity)?;

        let score = compute_score(input.likelihood, input.severity);
        let level = compute_level(score);

        let risk = self.store.create(RiskData {
            hazard: input.hazard,
            likelihood: input.likelihood,
            severity: input.severity,
            score,
            level,
        })?;

        tracing::debug!(risk_id = %risk.id, score, level = %risk.level, "Risk created");
        Ok(risk)
    }

    /// Apply a partial update, rederiving score and level if and only if
    /// the patch touches likelihood or severity. Fails with `NotFound`
    /// when the id has no record.
    pub fn update(&self, id: RiskId, patch: RiskPatch) -> Result<Risk, ServiceError> {
        if let Some(hazard) = &patch.hazard {
            validate_hazard(hazard)?;
        }
        if let Some(likelihood) = patch.likelihood {
            validate_rating("likelihood", likelihood)?;
        }
        if let Some(severity) = patch.severity {
            validate_rating("severity", severity)?;
        }

        let existing = self.store.find(id)?.ok_or(ServiceError::NotFound(id))?;

        let mut changes = RiskUpdate {
            hazard: patch.hazard.clone(),
            likelihood: patch.likelihood,
            severity: patch.severity,
            ..Default::default()
        };

        // A rating change invalidates the cached score and level; both are
        // rederived together from the merged ratings. A hazard-only patch
        // leaves them untouched.
        if patch.touches_rating() {
            let likelihood = patch.likelihood.unwrap_or(existing.likelihood);
            let severity = patch.severity.unwrap_or(existing.severity);
            let score = compute_score(likelihood, severity);
            changes.score = Some(score);
            changes.level = Some(compute_level(score));
        }

        let risk = self.store.update(id, changes)?;

        tracing::debug!(risk_id = %risk.id, score = risk.score, level = %risk.level, "Risk updated");
        Ok(risk)
    }

    /// Remove a risk. A missing id surfaces as the store's `NotFound`
    /// rather than silent success.
    pub fn delete(&self, id: RiskId) -> Result<(), ServiceError> {
        self.store.delete(id)?;
        tracing::debug!(risk_id = %id, "Risk deleted");
        Ok(())
    }
}

fn validate_hazard(hazard: &str) -> Result<(), ServiceError> {
    if hazard.trim().is_empty() {
        return Err(ServiceError::Invalid("hazard must not be empty".to_string()));
    }
    Ok(())
}

fn validate_rating(field: &str, value: u8) -> Result<(), ServiceError> {
    if !(1..=5).contains(&value) {
        return Err(ServiceError::Invalid(format!(
            "{field} must be between 1 and 5, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskreg_store::JsonRiskStore;
    use tempfile::TempDir;

    fn service() -> (TempDir, RiskService<JsonRiskStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonRiskStore::new(dir.path()).unwrap();
        (dir, RiskService::new(store))
    }

    fn new_risk(hazard: &str, likelihood: u8, severity: u8) -> NewRisk {
        NewRisk {
            hazard: hazard.to_string(),
            likelihood,
            severity,
        }
    }

    #[test]
    fn create_derives_score_and_level() {
        let (_dir, svc) = service();

        let risk = svc.create(new_risk("Test risk", 3, 4)).unwrap();

        assert_eq!(risk.score, 12);
        assert_eq!(risk.level, RiskLevel::High);
        assert_eq!(risk.score, risk.likelihood * risk.severity);
        assert_eq!(risk.level, compute_level(risk.score));
    }

    #[test]
    fn create_rejects_empty_hazard() {
        let (_dir, svc) = service();

        let result = svc.create(new_risk("  ", 1, 1));
        assert!(matches!(result, Err(ServiceError::Invalid(_))));
    }

    #[test]
    fn create_rejects_out_of_range_rating() {
        let (_dir, svc) = service();

        assert!(matches!(
            svc.create(new_risk("Bad", 0, 3)),
            Err(ServiceError::Invalid(_))
        ));
        assert!(matches!(
            svc.create(new_risk("Bad", 3, 6)),
            Err(ServiceError::Invalid(_))
        ));
    }

    #[test]
    fn hazard_only_patch_leaves_derived_fields() {
        let (_dir, svc) = service();

        let created = svc.create(new_risk("Original", 2, 3)).unwrap();
        assert_eq!(created.score, 6);
        assert_eq!(created.level, RiskLevel::Medium);

        let updated = svc
            .update(
                created.id,
                RiskPatch {
                    hazard: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.hazard, "X");
        assert_eq!(updated.score, 6);
        assert_eq!(updated.level, RiskLevel::Medium);
    }

    #[test]
    fn likelihood_patch_recomputes_with_existing_severity() {
        let (_dir, svc) = service();

        let created = svc.create(new_risk("Ladder work", 2, 3)).unwrap();
        let updated = svc
            .update(
                created.id,
                RiskPatch {
                    likelihood: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.likelihood, 4);
        assert_eq!(updated.severity, 3);
        assert_eq!(updated.score, 12);
        assert_eq!(updated.level, RiskLevel::High);
    }

    #[test]
    fn full_rating_patch_recomputes_both() {
        let (_dir, svc) = service();

        let created = svc.create(new_risk("Bench grinder", 1, 1)).unwrap();
        let updated = svc
            .update(
                created.id,
                RiskPatch {
                    likelihood: Some(5),
                    severity: Some(5),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.score, 25);
        assert_eq!(updated.level, RiskLevel::Critical);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let (_dir, svc) = service();

        let id = RiskId::new();
        let result = svc.update(
            id,
            RiskPatch {
                hazard: Some("Y".to_string()),
                ..Default::default()
            },
        );

        match result {
            Err(ServiceError::NotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn get_miss_is_none() {
        let (_dir, svc) = service();
        assert!(svc.get(RiskId::new()).unwrap().is_none());
    }

    #[test]
    fn delete_missing_id_surfaces_not_found() {
        let (_dir, svc) = service();

        let result = svc.delete(RiskId::new());
        assert!(matches!(
            result,
            Err(ServiceError::Store(StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn list_combines_filters_and_orders_by_score() {
        let (_dir, svc) = service();

        svc.create(new_risk("Fire door blocked", 4, 4)).unwrap(); // High, 16
        svc.create(new_risk("FIRE extinguisher missing", 5, 3)).unwrap(); // High, 15
        svc.create(new_risk("Fire alarm untested", 2, 2)).unwrap(); // Low, 4
        svc.create(new_risk("Loose handrail", 4, 3)).unwrap(); // High, 12

        let params = ListParams {
            q: Some("fire".to_string()),
            level: Some(RiskLevel::High),
        };
        let results = svc.list(&params).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, 16);
        assert_eq!(results[1].score, 15);
        assert!(results
            .iter()
            .all(|r| r.hazard.to_lowercase().contains("fire") && r.level == RiskLevel::High));
    }

    #[test]
    fn empty_query_string_imposes_no_restriction() {
        let (_dir, svc) = service();

        svc.create(new_risk("a", 1, 1)).unwrap();
        svc.create(new_risk("b", 2, 2)).unwrap();

        let params = ListParams {
            q: Some(String::new()),
            level: None,
        };
        assert_eq!(svc.list(&params).unwrap().len(), 2);
    }

    #[test]
    fn every_returned_risk_upholds_the_invariant() {
        let (_dir, svc) = service();

        let a = svc.create(new_risk("a", 5, 5)).unwrap();
        let b = svc
            .update(
                a.id,
                RiskPatch {
                    severity: Some(1),
                    ..Default::default()
                },
            )
            .unwrap();

        for risk in [a, b] {
            assert_eq!(risk.score, risk.likelihood * risk.severity);
            assert_eq!(risk.level, compute_level(risk.score));
        }
    }
}
