//! Test fixture loader for reference bundles, classifier artifacts, and stub
//! classifiers shared by the workspace's tests.

use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use triage_core::errors::{ClassifierError, TriageResult};
use triage_core::models::ProbabilityVector;
use triage_core::traits::IConditionClassifier;

/// Bundle with 10 conditions split evenly over two groups.
pub const TWO_GROUPS: &str = "reference/two_groups.json";

/// Six-subspecialty gynecology bundle with 18 conditions and 5 doctors.
pub const GYNECOLOGY: &str = "reference/gynecology.json";

/// Three-condition bundle matching the label map of `TINY_MODEL`.
pub const TINY: &str = "reference/tiny.json";

/// Linear TF-IDF artifact with three classes.
pub const TINY_MODEL: &str = "classifier/tiny_model.json";

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_str(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Classifier that ignores the text and returns a preset vector.
///
/// The vector can be swapped between calls to simulate new text.
pub struct FixedClassifier {
    output: Mutex<Vec<f64>>,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl FixedClassifier {
    pub fn new(output: Vec<f64>) -> Self {
        Self {
            output: Mutex::new(output),
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// Uniform distribution over `n` conditions.
    pub fn uniform(n: usize) -> Self {
        Self::new(ProbabilityVector::uniform(n).into_inner())
    }

    pub fn set_output(&self, output: Vec<f64>) {
        *self.output.lock().unwrap() = output;
    }

    /// While set, `score` fails as if the model were unavailable.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `score` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Texts passed to `score`, in call order.
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl IConditionClassifier for FixedClassifier {
    fn score(&self, text: &str) -> TriageResult<ProbabilityVector> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClassifierError::Unavailable {
                reason: "model not loaded".to_string(),
            }
            .into());
        }
        self.texts.lock().unwrap().push(text.to_string());
        Ok(ProbabilityVector::new(self.output.lock().unwrap().clone()))
    }

    fn num_classes(&self) -> usize {
        self.output.lock().unwrap().len()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Vector of length `n` with `weights` at the given ids and zero elsewhere, normalized.
pub fn peaked(n: usize, weights: &[(usize, f64)]) -> Vec<f64> {
    let mut v = vec![0.0; n];
    for &(id, w) in weights {
        v[id] = w;
    }
    let total: f64 = v.iter().sum();
    v.into_iter().map(|x| x / total).collect()
}
