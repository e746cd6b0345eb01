//! The one connection allowed to write session rows.
//!
//! Writes are serialized behind a `tokio::sync::Mutex`. The guard is only
//! ever held for a synchronous closure, never across an `.await`, so the
//! blocking path can be taken from plain threads and runtime threads alike.

use std::path::Path;

use rusqlite::Connection;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::{Mutex, MutexGuard};

use triage_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use triage_core::errors::TriageResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open (creating if needed) the database file with write pragmas applied.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> TriageResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
        Self::with_pragmas(conn, busy_timeout_ms)
    }

    /// Private in-memory database; it is the only connection that sees it.
    pub fn open_in_memory() -> TriageResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| to_storage_err(format!("open in-memory: {e}")))?;
        Self::with_pragmas(conn, DEFAULT_BUSY_TIMEOUT_MS)
    }

    fn with_pragmas(conn: Connection, busy_timeout_ms: u32) -> TriageResult<Self> {
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Async access: waits for the writer without blocking the runtime.
    pub async fn with_conn<F, T>(&self, f: F) -> TriageResult<T>
    where
        F: FnOnce(&Connection) -> TriageResult<T>,
    {
        let guard = self.conn.lock().await;
        f(&guard)
    }

    /// Blocking access, usable both outside and inside a tokio runtime.
    pub fn with_conn_sync<F, T>(&self, f: F) -> TriageResult<T>
    where
        F: FnOnce(&Connection) -> TriageResult<T>,
    {
        let guard = self.lock_blocking();
        f(&guard)
    }

    fn lock_blocking(&self) -> MutexGuard<'_, Connection> {
        let Ok(handle) = Handle::try_current() else {
            return self.conn.blocking_lock();
        };
        if let Ok(guard) = self.conn.try_lock() {
            return guard;
        }
        match handle.runtime_flavor() {
            // Only other OS threads can hold the guard here, and they release
            // it without yielding to this runtime.
            RuntimeFlavor::CurrentThread => loop {
                std::thread::yield_now();
                if let Ok(guard) = self.conn.try_lock() {
                    return guard;
                }
            },
            _ => tokio::task::block_in_place(|| self.conn.blocking_lock()),
        }
    }
}
