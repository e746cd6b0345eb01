//! # triage-engine
//!
//! One call of the triage loop: load the conversation, classify its text,
//! fold in the last answer, choose the next question and rank conditions,
//! subspecialties, and doctors.
//!
//! ## Modules
//!
//! - `transform`: power transform, group sums, tie-stable argmax and ordering
//! - `updater`: folds answers into the classifier distribution
//! - `selector`: next question outside the dominant subspecialty
//! - `ranking`: top conditions, subspecialty confidence, doctor matches
//! - `engine`: `TriageEngine`, the per-call pipeline
//! - `builder`: wiring an engine from `TriageConfig`
//! - `tracing_setup`: subscriber initialization and span macros

pub mod builder;
pub mod engine;
pub mod ranking;
pub mod selector;
pub mod tracing_setup;
pub mod transform;
pub mod updater;

pub use builder::{build_engine, StoreBackend};
pub use engine::TriageEngine;
pub use ranking::Rankings;
pub use selector::Selection;
pub use updater::UpdateOutcome;
