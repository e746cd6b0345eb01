//! Session lifecycle management.
//!
//! Conversations are removed once idle past the inactivity timeout or older
//! than the maximum age.

use chrono::Duration;

use triage_core::config::SessionConfig;

use crate::manager::SessionManager;

/// Remove conversations idle longer than `inactivity_timeout` or older than `max_age`.
///
/// Returns the number of conversations removed.
pub fn cleanup_stale_sessions(
    manager: &SessionManager,
    inactivity_timeout: Duration,
    max_age: Duration,
) -> usize {
    let removed = manager.remove_where(|state| {
        state.idle_duration() > inactivity_timeout || state.age() > max_age
    });
    if removed > 0 {
        tracing::info!(removed, "removed stale triage sessions");
    }
    removed
}

/// Cleanup using the configured timeouts.
pub fn cleanup_expired_sessions(manager: &SessionManager, config: &SessionConfig) -> usize {
    cleanup_stale_sessions(manager, config.inactivity_timeout(), config.max_age())
}
