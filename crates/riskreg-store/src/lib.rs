//! riskreg-store: Risk persistence — trait + JSON file-backed implementation.
//!
//! Records are stored as one JSON document per risk under a flat directory,
//! keyed by record id. The store owns id assignment and both timestamps;
//! callers hand it fully-derived field values and never see partial writes.

pub mod store;

pub use store::{JsonRiskStore, RiskData, RiskQuery, RiskStore, RiskUpdate, StoreError};
