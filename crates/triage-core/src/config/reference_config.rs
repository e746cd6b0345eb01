use serde::{Deserialize, Serialize};

use super::defaults;

/// Locations of the reference bundle and classifier artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// JSON bundle with conditions, subspecialties, doctors and weights.
    pub tables_path: String,
    /// JSON classifier artifact.
    pub classifier_path: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            tables_path: defaults::DEFAULT_TABLES_PATH.to_string(),
            classifier_path: defaults::DEFAULT_CLASSIFIER_PATH.to_string(),
        }
    }
}
