//! riskreg-core: Domain types and scoring engine for the risk register.
//!
//! This crate provides the foundational pieces shared by every riskreg
//! component:
//! - The `Risk` entity and its input shapes (`NewRisk`, `RiskPatch`)
//! - The scoring engine (score and level derivation)
//! - The likelihood/severity label vocabulary

pub mod scoring;
pub mod types;

pub use types::{NewRisk, Risk, RiskId, RiskLevel, RiskPatch};
