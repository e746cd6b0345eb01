//! LinearSoftmaxClassifier: TF-IDF features, one linear layer, softmax.

use std::path::Path;

use triage_core::errors::TriageResult;
use triage_core::models::ProbabilityVector;
use triage_core::traits::IConditionClassifier;

use crate::artifact::LinearModelArtifact;
use crate::vectorizer::{SparseVector, TfidfVectorizer};

/// Inference for an exported linear text model.
///
/// Output position `i` is condition `i`: class probabilities are scattered
/// through the artifact's label map.
pub struct LinearSoftmaxClassifier {
    name: String,
    labels: Vec<usize>,
    word: TfidfVectorizer,
    char: Option<TfidfVectorizer>,
    word_width: usize,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearSoftmaxClassifier {
    pub fn from_artifact(artifact: LinearModelArtifact) -> Self {
        let word = TfidfVectorizer::new(artifact.word);
        let word_width = word.num_features();
        Self {
            name: artifact.name,
            labels: artifact.labels,
            word,
            char: artifact.char.map(TfidfVectorizer::new),
            word_width,
            coef: artifact.coef,
            intercept: artifact.intercept,
        }
    }

    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let artifact = LinearModelArtifact::from_file(path)?;
        tracing::info!(
            path = %path.display(),
            classes = artifact.num_classes(),
            features = artifact.num_features(),
            "classifier artifact loaded"
        );
        Ok(Self::from_artifact(artifact))
    }

    /// Word features followed by character features, offset past the word columns.
    fn features(&self, text: &str) -> SparseVector {
        let mut features = self.word.transform(text);
        if let Some(char_vectorizer) = &self.char {
            features.extend(
                char_vectorizer
                    .transform(text)
                    .into_iter()
                    .map(|(col, v)| (col + self.word_width, v)),
            );
        }
        features
    }

    /// Raw class scores, indexed by class.
    pub fn decision_function(&self, text: &str) -> Vec<f64> {
        let features = self.features(text);
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| b + features.iter().map(|(col, v)| row[*col] * v).sum::<f64>())
            .collect()
    }
}

/// Numerically stable softmax.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|z| (z - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

impl IConditionClassifier for LinearSoftmaxClassifier {
    fn score(&self, text: &str) -> TriageResult<ProbabilityVector> {
        let class_probs = softmax(&self.decision_function(text));
        let mut by_condition = vec![0.0; self.labels.len()];
        for (class, p) in class_probs.into_iter().enumerate() {
            by_condition[self.labels[class]] = p;
        }
        Ok(ProbabilityVector::new(by_condition))
    }

    fn num_classes(&self) -> usize {
        self.labels.len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
