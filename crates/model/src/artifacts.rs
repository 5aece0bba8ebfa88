//! Serialized model artifacts: a fitted TF-IDF vectorizer and a fitted
//! linear classifier. Both are frozen by the upstream training process and
//! read-only at serving time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Class code for fake news.
pub const CLASS_FAKE: u8 = 0;
/// Class code for reliable news.
pub const CLASS_RELIABLE: u8 = 1;

/// Human-readable label for a class code.
pub fn class_label(code: u8) -> &'static str {
    if code == CLASS_RELIABLE {
        "Reliable News"
    } else {
        "Fake News"
    }
}

/// A fitted TF-IDF vectorizer over a fixed vocabulary.
///
/// Maps arbitrary text to a dense vector of `n_features()` weights.
/// Tokens outside the vocabulary contribute nothing; that is inherent to
/// the fixed-vocabulary design, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Token → feature index. Every index is < `idf.len()`.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse-document-frequency weight per feature.
    pub idf: Vec<f64>,
    /// Vocabulary size cap configured at fit time (e.g. 5000).
    pub max_features: usize,
}

impl TfidfVectorizer {
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Every vocabulary index must point inside the idf table.
    pub fn is_consistent(&self) -> bool {
        self.vocabulary.values().all(|&i| i < self.idf.len())
    }

    /// Transform text into an L2-normalized term-frequency × idf vector.
    ///
    /// Pure and deterministic: the same text always yields the same vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = vec![0.0; self.n_features()];
        for (index, count) in counts {
            vector[index] = count * self.idf[index];
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

/// Lowercased tokens of at least two word characters.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_lowercase())
}

/// A fitted binary linear classifier over the vectorizer's feature space.
///
/// `weights.len()` must equal the vectorizer's feature count; the loader
/// enforces this before the classifier is ever used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearClassifier {
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Raw decision value for a feature vector of matching width.
    pub fn decision(&self, vector: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(vector)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias
    }

    /// Class code: 1 (reliable) only when the decision value strictly
    /// exceeds the boundary, so an exact tie resolves to 0 (fake).
    pub fn predict(&self, vector: &[f64]) -> u8 {
        if self.decision(vector) > 0.0 {
            CLASS_RELIABLE
        } else {
            CLASS_FAKE
        }
    }

    /// Probability distribution `[p(fake), p(reliable)]`, summing to 1.0.
    pub fn predict_proba(&self, vector: &[f64]) -> [f64; 2] {
        let p_reliable = sigmoid(self.decision(vector));
        [1.0 - p_reliable, p_reliable]
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
