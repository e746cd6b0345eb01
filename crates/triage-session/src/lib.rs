//! # triage-session
//!
//! Per-conversation triage state held in memory.
//! Concurrent access via `DashMap`; one entry per conversation id.
//!
//! ## Modules
//!
//! - `manager`: `SessionManager`, an `ISessionStore` backed by `DashMap`
//! - `cleanup`: Removal of inactive and expired conversations

pub mod cleanup;
pub mod manager;

pub use cleanup::{cleanup_expired_sessions, cleanup_stale_sessions};
pub use manager::SessionManager;
