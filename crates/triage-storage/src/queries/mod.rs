//! SQL for sessions and their answer log.

pub mod event_ops;
pub mod session_ops;
