//! One writer plus, for file-backed databases, a pool of readers.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use triage_core::errors::TriageResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases, which no second connection can see.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// The writer opens first so the file exists before readers attach.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> TriageResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> TriageResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
            db_path: None,
        })
    }

    /// Run a read on a pooled reader, or on the writer when there is none.
    pub fn read<F, T>(&self, f: F) -> TriageResult<T>
    where
        F: FnOnce(&Connection) -> TriageResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn_sync(f),
        }
    }
}
