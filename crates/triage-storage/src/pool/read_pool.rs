//! Read-only connections for file-backed stores. Under WAL they read a
//! consistent snapshot while the writer commits.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use triage_core::errors::TriageResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Upper bound on `storage.read_pool_size`.
pub const MAX_READERS: usize = 8;

pub struct ReadPool {
    readers: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Attach `size` readers (clamped to `1..=MAX_READERS`) to an existing
    /// database file.
    pub fn open(path: &Path, size: usize, busy_timeout_ms: u32) -> TriageResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let readers = (0..size.clamp(1, MAX_READERS))
            .map(|_| {
                let conn = Connection::open_with_flags(path, flags)
                    .map_err(|e| to_storage_err(format!("open reader {}: {e}", path.display())))?;
                apply_read_pragmas(&conn, busy_timeout_ms)?;
                Ok(Mutex::new(conn))
            })
            .collect::<TriageResult<Vec<_>>>()?;
        Ok(Self {
            readers,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Run a query on the next reader in turn.
    pub fn with_conn<F, T>(&self, f: F) -> TriageResult<T>
    where
        F: FnOnce(&Connection) -> TriageResult<T>,
    {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let guard = self.readers[idx]
            .lock()
            .map_err(|_| to_storage_err(format!("reader {idx} poisoned by a panicked query")))?;
        f(&guard)
    }

    pub fn size(&self) -> usize {
        self.readers.len()
    }
}
