use serde::{Deserialize, Serialize};

use super::defaults;

/// Session lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds of inactivity before a conversation is considered stale.
    pub inactivity_timeout_secs: u64,
    /// Maximum conversation age in seconds.
    pub max_age_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout_secs: defaults::DEFAULT_INACTIVITY_TIMEOUT_SECS,
            max_age_secs: defaults::DEFAULT_MAX_AGE_SECS,
        }
    }
}

impl SessionConfig {
    pub fn inactivity_timeout(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.inactivity_timeout_secs as i64)
    }

    pub fn max_age(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.max_age_secs as i64)
    }
}
