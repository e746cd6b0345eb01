//! # triage-reference
//!
//! Static reference tables consumed by the triage engine, loaded once and
//! shared read-only across calls.
//!
//! ## Modules
//!
//! - `bundle`: serialized form of all tables
//! - `tables`: `ReferenceTables`, validated lookups keyed by condition id
//! - `validation`: cross-table consistency checks
//! - `fingerprint`: content hash used to detect version skew

pub mod bundle;
pub mod fingerprint;
pub mod tables;
pub mod validation;

pub use bundle::ReferenceBundle;
pub use tables::ReferenceTables;
