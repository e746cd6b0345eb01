//! Cross-table consistency checks. Any failure is a `ReferenceDataMismatch`.

use triage_core::errors::{ReferenceError, TriageResult};

use crate::bundle::ReferenceBundle;

/// Minimum doctor catalog size: the ranking always reports three matches.
pub const MIN_DOCTORS: usize = 3;

/// Validate a bundle whose tables are already sorted by id.
pub fn validate(bundle: &ReferenceBundle) -> TriageResult<()> {
    check_dense_ids("subspecialties", bundle.subspecialties.iter().map(|s| s.id))?;
    check_dense_ids("conditions", bundle.conditions.iter().map(|c| c.id))?;
    check_dense_ids("doctors", bundle.doctors.iter().map(|d| d.id))?;

    if bundle.conditions.is_empty() {
        return Err(invalid("conditions", "table is empty"));
    }
    if bundle.subspecialties.is_empty() {
        return Err(invalid("subspecialties", "table is empty"));
    }
    if bundle.doctors.len() < MIN_DOCTORS {
        return Err(invalid(
            "doctors",
            format!("need at least {MIN_DOCTORS} doctors, found {}", bundle.doctors.len()),
        ));
    }

    for condition in &bundle.conditions {
        if condition.subspecialty >= bundle.subspecialties.len() {
            return Err(ReferenceError::UnknownSubspecialty {
                condition_id: condition.id,
                subspecialty_id: condition.subspecialty,
            }
            .into());
        }
        if !condition.scaler.is_finite() || condition.scaler < 0.0 {
            return Err(invalid(
                "conditions",
                format!("condition {} has invalid scaler {}", condition.id, condition.scaler),
            ));
        }
    }

    check_doctor_weights(bundle)
}

/// The weight matrix has one row per condition and one column per doctor.
pub fn check_doctor_weights(bundle: &ReferenceBundle) -> TriageResult<()> {
    if bundle.doctor_weights.len() != bundle.conditions.len() {
        return Err(invalid(
            "doctor_weights",
            format!(
                "{} rows for {} conditions",
                bundle.doctor_weights.len(),
                bundle.conditions.len()
            ),
        ));
    }
    let width = bundle.doctors.len();
    for (condition_id, row) in bundle.doctor_weights.iter().enumerate() {
        if row.len() != width {
            return Err(ReferenceError::DoctorRowWidth {
                condition_id,
                expected: width,
                actual: row.len(),
            }
            .into());
        }
        if let Some(w) = row.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(invalid(
                "doctor_weights",
                format!("condition {condition_id} has invalid weight {w}"),
            ));
        }
    }
    Ok(())
}

/// Ids, in sorted order, must be exactly 0..n.
fn check_dense_ids(table: &str, ids: impl Iterator<Item = usize>) -> TriageResult<()> {
    for (position, id) in ids.enumerate() {
        if position != id {
            return Err(invalid(
                table,
                format!("ids must be contiguous from 0; expected {position}, found {id}"),
            ));
        }
    }
    Ok(())
}

fn invalid(table: &str, reason: impl Into<String>) -> triage_core::TriageError {
    ReferenceError::InvalidTable {
        table: table.to_string(),
        reason: reason.into(),
    }
    .into()
}
