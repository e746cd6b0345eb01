//! # triage-classifier
//!
//! Maps free text to a probability vector over the condition catalog.
//!
//! ## Modules
//!
//! - `artifact`: serialized model: vocabularies, idf weights, coefficients, label map
//! - `vectorizer`: word and character n-gram TF-IDF features
//! - `linear`: `LinearSoftmaxClassifier`, the `IConditionClassifier` implementation
//! - `validation`: shape and value checks applied to any classifier's output

pub mod artifact;
pub mod linear;
pub mod validation;
pub mod vectorizer;

pub use artifact::{LinearModelArtifact, VectorizerSpec};
pub use linear::LinearSoftmaxClassifier;
pub use validation::validate_distribution;
pub use vectorizer::TfidfVectorizer;
