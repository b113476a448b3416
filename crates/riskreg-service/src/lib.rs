//! riskreg-service: CRUD orchestration for the risk register.
//!
//! `RiskService` is the sole writer of the derived `score` and `level`
//! fields: it computes both together on create, and rederives both on any
//! update that touches a rating. The store is injected at construction so
//! services can be built over any `RiskStore` backend.

pub mod service;

pub use service::{ListParams, RiskService, ServiceError};
