//! Sessions written through one engine are readable after reopening the file.

use triage_core::config::StorageConfig;
use triage_core::models::{Answer, ConversationId, SessionState};
use triage_core::traits::ISessionStore;
use triage_storage::StorageEngine;

#[test]
fn state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.db");

    let mut state = SessionState::new(ConversationId::from("conv-restart"), "fp-1");
    state.append_text("heavy bleeding");
    state.last_question_id = Some(5);
    let qid = state.record_answer(Answer::No).unwrap();
    state.last_question_id = Some(9);

    {
        let storage = StorageEngine::open(&path).unwrap();
        storage.save_with_answer(&state, qid, Answer::No).unwrap();
    }

    let storage = StorageEngine::open(&path).unwrap();
    let loaded = storage.load(&state.conversation_id).unwrap().unwrap();
    assert_eq!(loaded, state);
    assert_eq!(storage.answer_events(&state.conversation_id).unwrap().len(), 1);
}

#[test]
fn reopening_does_not_reapply_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.db");

    let first = StorageEngine::open(&path).unwrap();
    let version = first.schema_version().unwrap();
    drop(first);

    let second = StorageEngine::open(&path).unwrap();
    assert_eq!(second.schema_version().unwrap(), version);
}

#[test]
fn file_backed_engine_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageEngine::open(&dir.path().join("sessions.db")).unwrap();

    let wal = storage
        .pool()
        .writer
        .with_conn_sync(triage_storage::pool::pragmas::verify_wal_mode)
        .unwrap();
    assert!(wal);
}

#[test]
fn only_file_backed_engines_open_readers() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        read_pool_size: 2,
        ..StorageConfig::default()
    };
    let storage = StorageEngine::open_with_config(&dir.path().join("sessions.db"), &config).unwrap();
    assert_eq!(storage.pool().readers.as_ref().map(|r| r.size()), Some(2));

    let in_memory = StorageEngine::open_in_memory().unwrap();
    assert!(in_memory.pool().readers.is_none());
}

fn answered(id: &str) -> SessionState {
    let mut state = SessionState::new(ConversationId::from(id), "fp-1");
    state.append_text("cramping");
    state.last_question_id = Some(4);
    state.record_answer(Answer::Yes);
    state
}

#[tokio::test]
async fn blocking_writes_work_on_a_current_thread_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageEngine::open(&dir.path().join("sessions.db")).unwrap();
    let state = answered("conv-rt");

    storage.save_with_answer(&state, 4, Answer::Yes).unwrap();
    storage.replace(&state).unwrap();

    assert_eq!(storage.load(&state.conversation_id).unwrap(), Some(state));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_writes_work_on_a_multi_thread_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let storage = std::sync::Arc::new(StorageEngine::open(&dir.path().join("sessions.db")).unwrap());

    let tasks: Vec<_> = (0..4)
        .map(|n| {
            let storage = storage.clone();
            tokio::spawn(async move {
                let state = answered(&format!("conv-{n}"));
                storage.save(&state).unwrap();
                state
            })
        })
        .collect();
    for task in tasks {
        let state = task.await.unwrap();
        assert_eq!(storage.load(&state.conversation_id).unwrap(), Some(state));
    }

    let count = storage
        .pool()
        .writer
        .with_conn(|conn| {
            Ok(conn
                .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get::<_, i64>(0))
                .unwrap())
        })
        .await
        .unwrap();
    assert_eq!(count, 4);
}
