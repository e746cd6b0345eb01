//! Serialized linear model exported from training.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use triage_core::errors::{ClassifierError, TriageResult};

/// How a vectorizer splits text into terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyzer {
    /// Word n-grams over tokens of two or more word characters.
    Word,
    /// Character n-grams over the whole text.
    Char,
    /// Character n-grams inside word boundaries, words padded with a space.
    CharWb,
}

/// Parameters of one fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerSpec {
    pub analyzer: Analyzer,
    /// Inclusive `[min_n, max_n]`.
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Term → feature column.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature column.
    pub idf: Vec<f64>,
}

fn default_true() -> bool {
    true
}

/// Complete model: one or two vectorizers stacked column-wise, then a linear layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelArtifact {
    #[serde(default = "default_name")]
    pub name: String,
    /// Class index → condition id.
    pub labels: Vec<usize>,
    pub word: VectorizerSpec,
    /// Optional second vectorizer whose columns follow the word columns.
    #[serde(default)]
    pub char: Option<VectorizerSpec>,
    /// `coef[class][feature]`.
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

fn default_name() -> String {
    "linear-softmax".to_string()
}

impl LinearModelArtifact {
    pub fn from_json(json: &str) -> TriageResult<Self> {
        let artifact: Self = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| invalid(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    /// Total feature columns across both vectorizers.
    pub fn num_features(&self) -> usize {
        self.word.idf.len() + self.char.as_ref().map_or(0, |c| c.idf.len())
    }

    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    fn validate(&self) -> TriageResult<()> {
        let n = self.labels.len();
        if n == 0 {
            return Err(invalid("label map is empty"));
        }
        // Labels must be a permutation of 0..n so every condition gets exactly one class.
        let mut seen = vec![false; n];
        for &label in &self.labels {
            if label >= n || seen[label] {
                return Err(invalid(format!(
                    "label map must be a permutation of 0..{n}, found {label}"
                )));
            }
            seen[label] = true;
        }

        check_vectorizer("word", &self.word)?;
        if let Some(char_spec) = &self.char {
            check_vectorizer("char", char_spec)?;
        }

        if self.coef.len() != n || self.intercept.len() != n {
            return Err(invalid(format!(
                "{n} labels but {} coefficient rows and {} intercepts",
                self.coef.len(),
                self.intercept.len()
            )));
        }
        let width = self.num_features();
        if let Some((class, row)) = self.coef.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(invalid(format!(
                "coefficient row {class} has {} columns, expected {width}",
                row.len()
            )));
        }
        Ok(())
    }
}

fn check_vectorizer(which: &str, spec: &VectorizerSpec) -> TriageResult<()> {
    let (min_n, max_n) = spec.ngram_range;
    if min_n == 0 || min_n > max_n {
        return Err(invalid(format!(
            "{which} vectorizer has invalid ngram_range ({min_n}, {max_n})"
        )));
    }
    if let Some((term, col)) = spec.vocabulary.iter().find(|(_, &c)| c >= spec.idf.len()) {
        return Err(invalid(format!(
            "{which} vocabulary term {term:?} maps to column {col} beyond {} idf weights",
            spec.idf.len()
        )));
    }
    Ok(())
}

fn invalid(reason: impl Into<String>) -> triage_core::TriageError {
    ClassifierError::InvalidArtifact {
        reason: reason.into(),
    }
    .into()
}
