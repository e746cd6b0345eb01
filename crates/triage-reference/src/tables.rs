//! ReferenceTables: validated, id-indexed lookups.

use std::path::Path;

use triage_core::errors::{ReferenceError, TriageResult};
use triage_core::models::{ConditionRecord, Doctor, SubspecialtyGroup};

use crate::bundle::ReferenceBundle;
use crate::{fingerprint, validation};

/// Immutable reference data. Row `i` of every per-condition table is condition `i`.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    bundle: ReferenceBundle,
    group_map: Vec<usize>,
    fingerprint: String,
}

impl ReferenceTables {
    /// Validate a bundle and build lookup tables.
    pub fn from_bundle(mut bundle: ReferenceBundle) -> TriageResult<Self> {
        validation::check_doctor_weights(&bundle)?;
        bundle.sort_by_id();
        validation::validate(&bundle)?;

        let group_map = bundle.conditions.iter().map(|c| c.subspecialty).collect();
        let fingerprint = fingerprint::fingerprint(&bundle)?;

        tracing::info!(
            conditions = bundle.conditions.len(),
            subspecialties = bundle.subspecialties.len(),
            doctors = bundle.doctors.len(),
            fingerprint = %fingerprint,
            "reference tables loaded"
        );

        Ok(Self {
            bundle,
            group_map,
            fingerprint,
        })
    }

    pub fn from_json(json: &str) -> TriageResult<Self> {
        Self::from_bundle(ReferenceBundle::from_json(json)?)
    }

    pub fn from_file(path: &Path) -> TriageResult<Self> {
        Self::from_bundle(ReferenceBundle::from_file(path)?)
    }

    pub fn num_conditions(&self) -> usize {
        self.bundle.conditions.len()
    }

    pub fn num_subspecialties(&self) -> usize {
        self.bundle.subspecialties.len()
    }

    pub fn num_doctors(&self) -> usize {
        self.bundle.doctors.len()
    }

    pub fn condition(&self, id: usize) -> TriageResult<&ConditionRecord> {
        self.bundle
            .conditions
            .get(id)
            .ok_or_else(|| ReferenceError::UnknownCondition { condition_id: id }.into())
    }

    pub fn conditions(&self) -> &[ConditionRecord] {
        &self.bundle.conditions
    }

    pub fn subspecialty(&self, id: usize) -> Option<&SubspecialtyGroup> {
        self.bundle.subspecialties.get(id)
    }

    pub fn subspecialties(&self) -> &[SubspecialtyGroup] {
        &self.bundle.subspecialties
    }

    /// Subspecialty group of a condition.
    pub fn group_of(&self, condition_id: usize) -> TriageResult<usize> {
        self.group_map.get(condition_id).copied().ok_or_else(|| {
            ReferenceError::UnknownCondition {
                condition_id,
            }
            .into()
        })
    }

    /// Condition id → group id, for every condition.
    pub fn group_map(&self) -> &[usize] {
        &self.group_map
    }

    pub fn scaler(&self, condition_id: usize) -> TriageResult<f64> {
        self.condition(condition_id).map(|c| c.scaler)
    }

    pub fn question(&self, condition_id: usize) -> TriageResult<&str> {
        self.condition(condition_id).map(|c| c.question.as_str())
    }

    pub fn doctor(&self, id: usize) -> Option<&Doctor> {
        self.bundle.doctors.get(id)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.bundle.doctors
    }

    /// `doctor_weights()[condition][doctor]`.
    pub fn doctor_weights(&self) -> &[Vec<f64>] {
        &self.bundle.doctor_weights
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// A probability vector must have exactly one entry per condition.
    pub fn check_vector_len(&self, len: usize) -> TriageResult<()> {
        if len != self.num_conditions() {
            return Err(ReferenceError::LengthMismatch {
                expected: self.num_conditions(),
                actual: len,
            }
            .into());
        }
        Ok(())
    }

    /// The fingerprint a conversation started with must match these tables.
    pub fn check_fingerprint(&self, recorded: &str) -> TriageResult<()> {
        if recorded != self.fingerprint {
            return Err(ReferenceError::FingerprintMismatch {
                expected: recorded.to_string(),
                actual: self.fingerprint.clone(),
            }
            .into());
        }
        Ok(())
    }

    pub fn bundle(&self) -> &ReferenceBundle {
        &self.bundle
    }
}
