//! Ordered schema migrations, tracked in `schema_version`.

pub mod v001_session_tables;
pub mod v002_session_events;

use rusqlite::{params, Connection, OptionalExtension};

use triage_core::errors::{StorageError, TriageResult};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> TriageResult<()>;

/// All migrations, in application order.
const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "session_tables", v001_session_tables::migrate),
    (2, "session_events", v002_session_events::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded schema version.
/// Returns the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> TriageResult<usize> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::MigrationFailed {
            version: current,
            reason: format!("database schema is newer than supported version {LATEST_VERSION}"),
        }
        .into());
    }

    let mut applied = 0;
    for (version, name, migrate) in MIGRATIONS.iter().filter(|(v, _, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("migration v{version:03} begin: {e}")))?;
        let result = migrate(&tx).and_then(|()| {
            tx.execute(
                "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
                params![version, name],
            )
            .map(|_| ())
            .map_err(|e| to_storage_err(e.to_string()))
        });
        match result {
            Ok(()) => {
                tx.commit()
                    .map_err(|e| to_storage_err(format!("migration v{version:03} commit: {e}")))?;
                applied += 1;
                tracing::debug!(version, name, "applied migration");
            }
            Err(e) => {
                let _ = tx.rollback();
                return Err(StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                }
                .into());
            }
        }
    }
    Ok(applied)
}

/// Highest applied schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> TriageResult<u32> {
    let version: Option<u32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .flatten();
    Ok(version.unwrap_or(0))
}
