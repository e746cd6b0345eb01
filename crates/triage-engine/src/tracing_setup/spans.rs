//! Span definitions per pipeline stage: infer, update, select, rank.

/// Create the span wrapping one full inference call.
#[macro_export]
macro_rules! infer_span {
    ($conversation_id:expr, $first_call:expr) => {
        tracing::info_span!(
            "triage.infer",
            conversation_id = %$conversation_id,
            first_call = $first_call
        )
    };
}

/// Create an update span.
#[macro_export]
macro_rules! update_span {
    ($answer:expr) => {
        tracing::info_span!("triage.update", answer = %$answer)
    };
}

/// Create a selection span.
#[macro_export]
macro_rules! select_span {
    ($asked:expr) => {
        tracing::info_span!("triage.select", asked = $asked)
    };
}

/// Create a ranking span.
#[macro_export]
macro_rules! rank_span {
    ($top_k:expr) => {
        tracing::info_span!("triage.rank", top_k = $top_k)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INFER: &str = "triage.infer";
    pub const UPDATE: &str = "triage.update";
    pub const SELECT: &str = "triage.select";
    pub const RANK: &str = "triage.rank";
}
