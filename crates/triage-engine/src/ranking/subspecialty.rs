use triage_core::errors::{ReferenceError, TriageResult};
use triage_core::models::{round_to, SubspecialtyResult};
use triage_reference::ReferenceTables;

use crate::transform::{descending_order, power_transform};

/// Every subspecialty, most confident first.
///
/// Group sums are sharpened with the power transform; `rank` is the 1-based
/// position in the returned list.
pub fn rank_subspecialties(
    group_sums: &[f64],
    tables: &ReferenceTables,
    alpha: f64,
    decimals: u32,
) -> TriageResult<Vec<SubspecialtyResult>> {
    let confidence = power_transform(group_sums, alpha);

    descending_order(&confidence)
        .into_iter()
        .enumerate()
        .map(|(position, group)| {
            let meta = tables.subspecialty(group).ok_or(ReferenceError::InvalidTable {
                table: "subspecialties".to_string(),
                reason: format!("no subspecialty with id {group}"),
            })?;
            Ok(SubspecialtyResult {
                rank: position + 1,
                subspecialty_name: meta.name.clone(),
                subspecialty_short: meta.short.clone(),
                percent_match: round_to(confidence[group], decimals),
            })
        })
        .collect()
}
