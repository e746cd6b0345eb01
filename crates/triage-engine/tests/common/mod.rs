#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use test_fixtures::FixedClassifier;
use triage_core::config::TriageConfig;
use triage_core::errors::{StorageError, TriageResult};
use triage_core::models::{Answer, ConversationId, SessionState};
use triage_core::traits::ISessionStore;
use triage_engine::TriageEngine;
use triage_reference::ReferenceTables;
use triage_session::SessionManager;

pub struct Harness {
    pub engine: TriageEngine,
    pub classifier: Arc<FixedClassifier>,
    pub store: SessionManager,
}

pub fn tables(fixture: &str) -> Arc<ReferenceTables> {
    Arc::new(ReferenceTables::from_file(&test_fixtures::fixture_path(fixture)).unwrap())
}

pub fn harness_with_config(fixture: &str, output: Vec<f64>, config: TriageConfig) -> Harness {
    let classifier = Arc::new(FixedClassifier::new(output));
    let store = SessionManager::new();
    let engine = TriageEngine::new(
        tables(fixture),
        classifier.clone(),
        Arc::new(store.clone()),
        config,
    )
    .unwrap();
    Harness {
        engine,
        classifier,
        store,
    }
}

pub fn harness(fixture: &str, output: Vec<f64>) -> Harness {
    harness_with_config(fixture, output, TriageConfig::default())
}

pub fn uniform_two_groups() -> Harness {
    harness(test_fixtures::TWO_GROUPS, vec![0.1; 10])
}

/// In-memory store whose state writes can be switched to fail. `reset` and
/// `remove` always go through, as they do on a backend with its own delete path.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: SessionManager,
    failing: AtomicBool,
}

impl FlakyStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> TriageResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::SqliteError {
                message: "disk I/O error".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl ISessionStore for FlakyStore {
    fn load(&self, id: &ConversationId) -> TriageResult<Option<SessionState>> {
        self.inner.load(id)
    }

    fn save(&self, state: &SessionState) -> TriageResult<()> {
        self.check()?;
        self.inner.save(state)
    }

    fn save_with_answer(
        &self,
        state: &SessionState,
        question_id: usize,
        answer: Answer,
    ) -> TriageResult<()> {
        self.check()?;
        self.inner.save_with_answer(state, question_id, answer)
    }

    fn reset(&self, id: &ConversationId, reference_fingerprint: &str) -> TriageResult<SessionState> {
        self.inner.reset(id, reference_fingerprint)
    }

    fn remove(&self, id: &ConversationId) -> TriageResult<Option<SessionState>> {
        self.inner.remove(id)
    }

    fn conversation_ids(&self) -> TriageResult<Vec<ConversationId>> {
        self.inner.conversation_ids()
    }
}

pub fn engine_on_store(store: Arc<dyn ISessionStore>) -> TriageEngine {
    TriageEngine::new(
        tables(test_fixtures::TWO_GROUPS),
        Arc::new(FixedClassifier::uniform(10)),
        store,
        TriageConfig::default(),
    )
    .unwrap()
}
