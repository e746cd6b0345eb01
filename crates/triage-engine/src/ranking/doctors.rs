use triage_core::errors::{ReferenceError, TriageResult};
use triage_core::models::DoctorResults;
use triage_reference::ReferenceTables;

use crate::transform::{descending_order, power_transform};

/// Per-doctor match scores in condition-weighted, log-damped, normalized form.
///
/// `raw[d] = Σ_i p[i]·W[i][d]`, then `ln(raw + 1)`, divided by the total and
/// power transformed. All zeros when no doctor has any weight.
pub fn doctor_scores(probs: &[f64], tables: &ReferenceTables, alpha: f64) -> Vec<f64> {
    let mut raw = vec![0.0; tables.num_doctors()];
    for (p, row) in probs.iter().zip(tables.doctor_weights()) {
        for (score, w) in raw.iter_mut().zip(row) {
            *score += p * w;
        }
    }

    let damped: Vec<f64> = raw.iter().map(|s| s.ln_1p()).collect();
    let total: f64 = damped.iter().sum();
    let normalized: Vec<f64> = if total > 0.0 {
        damped.iter().map(|d| d / total).collect()
    } else {
        vec![0.0; damped.len()]
    };
    power_transform(&normalized, alpha)
}

/// Best, second, and third doctor by match score.
pub fn rank_doctors(
    probs: &[f64],
    tables: &ReferenceTables,
    alpha: f64,
) -> TriageResult<DoctorResults> {
    let scores = doctor_scores(probs, tables, alpha);
    let order = descending_order(&scores);
    let name_at = |position: usize| -> TriageResult<String> {
        order
            .get(position)
            .and_then(|&d| tables.doctor(d))
            .map(|doc| doc.name.clone())
            .ok_or_else(|| {
                ReferenceError::InvalidTable {
                    table: "doctors".to_string(),
                    reason: format!("fewer than {} doctors", position + 1),
                }
                .into()
            })
    };

    Ok(DoctorResults {
        best: name_at(0)?,
        second: name_at(1)?,
        third: name_at(2)?,
    })
}
