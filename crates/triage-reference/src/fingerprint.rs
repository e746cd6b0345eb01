//! Content fingerprint of a reference bundle.
//!
//! Conversations record the fingerprint they started with; indices only line
//! up with the tables that produced them.

use triage_core::errors::TriageResult;

use crate::bundle::ReferenceBundle;

/// blake3 hex digest of the bundle's canonical JSON serialization.
pub fn fingerprint(bundle: &ReferenceBundle) -> TriageResult<String> {
    let canonical = serde_json::to_vec(bundle)?;
    Ok(blake3::hash(&canonical).to_hex().to_string())
}
