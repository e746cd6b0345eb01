//! TF-IDF feature extraction matching the fitted vocabularies.
//!
//! Term counts → optional sublinear tf (`1 + ln tf`) → × idf → L2 normalization.
//! Terms outside the vocabulary are dropped.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::artifact::{Analyzer, VectorizerSpec};

/// Sparse feature vector: (column, value), sorted by column.
pub type SparseVector = Vec<(usize, f64)>;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Tokens of two or more word characters.
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static token pattern"))
}

/// A fitted vectorizer.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    spec: VectorizerSpec,
}

impl TfidfVectorizer {
    pub fn new(spec: VectorizerSpec) -> Self {
        Self { spec }
    }

    pub fn num_features(&self) -> usize {
        self.spec.idf.len()
    }

    /// Split a document into the terms this vectorizer counts.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.spec.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let (min_n, max_n) = self.spec.ngram_range;
        match self.spec.analyzer {
            Analyzer::Word => word_ngrams(&text, min_n, max_n),
            Analyzer::Char => char_ngrams(&text, min_n, max_n),
            Analyzer::CharWb => char_wb_ngrams(&text, min_n, max_n),
        }
    }

    /// L2-normalized TF-IDF vector for one document.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(text) {
            if let Some(&col) = self.spec.vocabulary.get(&term) {
                *counts.entry(col).or_default() += 1.0;
            }
        }

        let mut features: SparseVector = counts
            .into_iter()
            .map(|(col, tf)| {
                let tf = if self.spec.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (col, tf * self.spec.idf[col])
            })
            .collect();
        features.sort_by_key(|(col, _)| *col);

        let norm = features.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut features {
                *v /= norm;
            }
        }
        features
    }
}

fn word_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let tokens: Vec<&str> = token_pattern().find_iter(text).map(|m| m.as_str()).collect();
    let mut terms = Vec::new();
    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

/// Collapse whitespace runs into single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn char_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let chars: Vec<char> = normalize_whitespace(text).chars().collect();
    let mut terms = Vec::new();
    for n in min_n..=max_n {
        if n > chars.len() {
            break;
        }
        for window in chars.windows(n) {
            terms.push(window.iter().collect());
        }
    }
    terms
}

fn char_wb_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let mut terms = Vec::new();
    for word in text.split_whitespace() {
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        for n in min_n..=max_n {
            if n >= padded.len() {
                // Shorter words contribute the whole padded word once.
                terms.push(padded.iter().collect());
                break;
            }
            for window in padded.windows(n) {
                terms.push(window.iter().collect());
            }
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(analyzer: Analyzer, ngram_range: (usize, usize), terms: &[&str]) -> VectorizerSpec {
        VectorizerSpec {
            analyzer,
            ngram_range,
            lowercase: true,
            sublinear_tf: false,
            vocabulary: terms
                .iter()
                .enumerate()
                .map(|(i, t)| (t.to_string(), i))
                .collect(),
            idf: vec![1.0; terms.len()],
        }
    }

    #[test]
    fn word_analyzer_drops_single_character_tokens() {
        let v = TfidfVectorizer::new(spec(Analyzer::Word, (1, 2), &[]));
        assert_eq!(
            v.analyze("I have a Headache"),
            vec!["have", "headache", "have headache"]
        );
    }

    #[test]
    fn char_wb_pads_words_with_spaces() {
        let v = TfidfVectorizer::new(spec(Analyzer::CharWb, (3, 3), &[]));
        assert_eq!(v.analyze("ab cde"), vec![" ab", "ab ", " cd", "cde", "de "]);
    }

    #[test]
    fn char_wb_short_word_yields_whole_padded_word() {
        let v = TfidfVectorizer::new(spec(Analyzer::CharWb, (4, 5), &[]));
        assert_eq!(v.analyze("ab"), vec![" ab "]);
    }

    #[test]
    fn char_analyzer_collapses_whitespace() {
        let v = TfidfVectorizer::new(spec(Analyzer::Char, (2, 2), &[]));
        assert_eq!(v.analyze("a  b"), vec!["a ", " b"]);
    }

    #[test]
    fn transform_is_l2_normalized() {
        let v = TfidfVectorizer::new(spec(Analyzer::Word, (1, 1), &["pelvic", "pain"]));
        let features = v.transform("pelvic pain pain");
        assert_eq!(features.len(), 2);
        let norm: f64 = features.iter().map(|(_, x)| x * x).sum();
        assert!((norm - 1.0).abs() < 1e-12);
        // "pain" counted twice.
        assert!(features[1].1 > features[0].1);
    }

    #[test]
    fn transform_of_unknown_text_is_empty() {
        let v = TfidfVectorizer::new(spec(Analyzer::Word, (1, 1), &["pelvic"]));
        assert!(v.transform("completely unrelated").is_empty());
    }
}
