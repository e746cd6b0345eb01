//! ReferenceBundle: the on-disk JSON form of every reference table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use triage_core::errors::{ReferenceError, TriageResult};
use triage_core::models::{ConditionRecord, Doctor, SubspecialtyGroup};

/// All reference tables in one document.
///
/// `doctor_weights[i][d]` is the affinity of condition `i` to doctor `d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBundle {
    pub subspecialties: Vec<SubspecialtyGroup>,
    pub conditions: Vec<ConditionRecord>,
    pub doctors: Vec<Doctor>,
    pub doctor_weights: Vec<Vec<f64>>,
}

impl ReferenceBundle {
    pub fn from_json(json: &str) -> TriageResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ReferenceError::InvalidTable {
                table: "bundle".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ReferenceError::InvalidTable {
            table: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Sort every table by id so row position equals id.
    pub(crate) fn sort_by_id(&mut self) {
        self.subspecialties.sort_by_key(|s| s.id);
        self.doctors.sort_by_key(|d| d.id);
        // Weights are positional; they follow the conditions' original order.
        let mut rows: Vec<(ConditionRecord, Vec<f64>)> = self
            .conditions
            .drain(..)
            .zip(self.doctor_weights.drain(..))
            .collect();
        rows.sort_by_key(|(c, _)| c.id);
        for (condition, weights) in rows {
            self.conditions.push(condition);
            self.doctor_weights.push(weights);
        }
    }
}
