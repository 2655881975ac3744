use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

use super::{invalid, read_json};
use crate::error::LoadError;
use crate::port::{FeatureTransformer, FeatureVector};

/// scikit-learn's default word pattern: runs of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VectorizerKind {
    Count,
    Tfidf,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

#[derive(Deserialize, Debug)]
struct VectorizerSpec {
    kind: VectorizerKind,
    vocabulary: HashMap<String, usize>,
    #[serde(default)]
    idf: Option<Vec<f64>>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    #[serde(default)]
    binary: bool,
    #[serde(default)]
    sublinear_tf: bool,
    // Absent falls back to the per-kind default, `null` disables normalization.
    #[serde(default, deserialize_with = "present_or_null")]
    norm: Option<Option<Norm>>,
    #[serde(default)]
    token_pattern: Option<String>,
    #[serde(default)]
    stop_words: Vec<String>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_lowercase() -> bool {
    true
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Bag-of-words / TF-IDF transformer rebuilt from an exported vocabulary.
#[derive(Debug)]
pub struct TextVectorizer {
    kind: VectorizerKind,
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    ngram_range: (usize, usize),
    lowercase: bool,
    binary: bool,
    sublinear_tf: bool,
    norm: Option<Norm>,
    token_re: Regex,
    stop_words: HashSet<String>,
    n_features: usize,
}

impl TextVectorizer {
    /// Load and validate a vectorizer export.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the file is missing, is not valid JSON, or
    /// describes an inconsistent vectorizer.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let spec: VectorizerSpec = read_json(path)?;
        let vectorizer = Self::build(spec, path)?;
        info!(
            path = %path.display(),
            kind = ?vectorizer.kind,
            n_features = vectorizer.n_features,
            "Loaded vectorizer"
        );
        Ok(vectorizer)
    }

    fn build(spec: VectorizerSpec, path: &Path) -> Result<Self, LoadError> {
        if spec.vocabulary.is_empty() {
            return Err(invalid(path, "vocabulary is empty"));
        }

        let n_features = spec
            .vocabulary
            .values()
            .max()
            .and_then(|max| max.checked_add(1))
            .ok_or_else(|| invalid(path, "vocabulary column index out of range"))?;
        let distinct: HashSet<usize> = spec.vocabulary.values().copied().collect();
        if distinct.len() != spec.vocabulary.len() {
            return Err(invalid(path, "vocabulary maps two terms to the same column"));
        }

        let (min_n, max_n) = spec.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(invalid(
                path,
                format!("ngram_range ({min_n}, {max_n}) must satisfy 1 <= min <= max"),
            ));
        }

        let idf = match (spec.kind, spec.idf) {
            (VectorizerKind::Tfidf, None) => {
                return Err(invalid(path, "tfidf vectorizer has no idf weights"));
            }
            (VectorizerKind::Tfidf, Some(idf)) if idf.len() != n_features => {
                return Err(invalid(
                    path,
                    format!(
                        "idf has {} weights but the vocabulary spans {n_features} columns",
                        idf.len()
                    ),
                ));
            }
            (VectorizerKind::Tfidf, idf) => idf,
            (VectorizerKind::Count, _) => None,
        };

        let norm = spec.norm.unwrap_or(match spec.kind {
            VectorizerKind::Tfidf => Some(Norm::L2),
            VectorizerKind::Count => None,
        });

        let pattern = spec
            .token_pattern
            .as_deref()
            .unwrap_or(DEFAULT_TOKEN_PATTERN);
        let token_re = Regex::new(pattern).map_err(|source| LoadError::TokenPattern {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            kind: spec.kind,
            vocabulary: spec.vocabulary,
            idf,
            ngram_range: spec.ngram_range,
            lowercase: spec.lowercase,
            binary: spec.binary,
            sublinear_tf: spec.sublinear_tf,
            norm,
            token_re,
            stop_words: spec.stop_words.into_iter().collect(),
            n_features,
        })
    }

    pub fn kind(&self) -> VectorizerKind {
        self.kind
    }

    /// Tokens and word n-grams of `text`, in the order they are counted.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let tokens: Vec<&str> = self
            .token_re
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    /// Vectorize a single text.
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = FeatureVector::from_entries(self.n_features, counts.into_iter().collect());

        if self.binary {
            vector.map_values(|_| 1.0);
        } else if self.sublinear_tf && self.kind == VectorizerKind::Tfidf {
            vector.map_values(|tf| 1.0 + tf.ln());
        }

        if let Some(idf) = &self.idf {
            vector = FeatureVector::from_entries(
                self.n_features,
                vector
                    .entries()
                    .iter()
                    .map(|(column, value)| (*column, value * idf[*column]))
                    .collect(),
            );
        }

        match self.norm {
            Some(Norm::L1) => {
                let norm = vector.l1_norm();
                vector.scale_by(norm);
            }
            Some(Norm::L2) => {
                let norm = vector.l2_norm();
                vector.scale_by(norm);
            }
            None => {}
        }

        vector
    }
}

impl FeatureTransformer for TextVectorizer {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn transform(&self, texts: &[String]) -> Vec<FeatureVector> {
        texts.iter().map(|text| self.vectorize(text)).collect()
    }
}
