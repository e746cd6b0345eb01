//! Configuration loaded from TOML. Every section falls back to defaults.

pub mod defaults;
mod engine_config;
mod observability_config;
mod question_config;
mod reference_config;
mod session_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use question_config::QuestionConfig;
pub use reference_config::ReferenceConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

use crate::errors::{TriageError, TriageResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub storage: StorageConfig,
    pub engine: EngineConfig,
    pub questions: QuestionConfig,
    pub session: SessionConfig,
    pub reference: ReferenceConfig,
    pub observability: ObservabilityConfig,
}

impl TriageConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(s: &str) -> TriageResult<Self> {
        toml::from_str(s).map_err(|e| TriageError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> TriageResult<String> {
        toml::to_string(self).map_err(|e| TriageError::ConfigError {
            reason: e.to_string(),
        })
    }
}
