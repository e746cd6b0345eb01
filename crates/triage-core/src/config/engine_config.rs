use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking and aggregation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of conditions in the top-k list.
    pub top_k: usize,
    /// Power-transform exponent for subspecialty confidence. > 1 sharpens.
    pub subspecialty_alpha: f64,
    /// Power-transform exponent for doctor scores. < 1 flattens.
    pub doctor_alpha: f64,
    /// Decimal places kept in displayed probabilities.
    pub display_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            subspecialty_alpha: defaults::DEFAULT_SUBSPECIALTY_ALPHA,
            doctor_alpha: defaults::DEFAULT_DOCTOR_ALPHA,
            display_decimals: defaults::DEFAULT_DISPLAY_DECIMALS,
        }
    }
}
