//! Shared test support utilities
//!
//! Provides in-memory `FeatureTransformer` / `LabelPredictor` implementations
//! so the pipeline and the handlers can be exercised without model files.

use std::sync::Arc;

use crate::classifier::SentimentClassifier;
use crate::domain::RawLabel;
use crate::error::InferenceError;
use crate::port::{FeatureTransformer, FeatureVector, LabelPredictor};

/// One column per keyword, counting whitespace-separated occurrences.
pub struct KeywordTransformer {
    keywords: Vec<String>,
}

impl KeywordTransformer {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl FeatureTransformer for KeywordTransformer {
    fn n_features(&self) -> usize {
        self.keywords.len()
    }

    fn transform(&self, texts: &[String]) -> Vec<FeatureVector> {
        texts
            .iter()
            .map(|text| {
                let entries = text
                    .split_whitespace()
                    .filter_map(|word| self.keywords.iter().position(|k| k == word))
                    .map(|column| (column, 1.0))
                    .collect();
                FeatureVector::from_entries(self.keywords.len(), entries)
            })
            .collect()
    }
}

/// Emits the label of the first rule whose column is non-zero.
pub struct StaticPredictor {
    n_features: usize,
    rules: Vec<(usize, RawLabel)>,
    fallback: RawLabel,
}

impl StaticPredictor {
    pub fn new(n_features: usize, rules: Vec<(usize, RawLabel)>, fallback: RawLabel) -> Self {
        Self {
            n_features,
            rules,
            fallback,
        }
    }

    /// Numeric codes per column, falling back to `0`.
    pub fn keyword_codes(n_features: usize, rules: &[(usize, i64)]) -> Self {
        Self::new(
            n_features,
            rules
                .iter()
                .map(|(column, code)| (*column, RawLabel::Integer(*code)))
                .collect(),
            RawLabel::Integer(0),
        )
    }
}

impl LabelPredictor for StaticPredictor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<RawLabel>, InferenceError> {
        features
            .iter()
            .map(|vector| {
                if vector.dim() != self.n_features {
                    return Err(InferenceError::ShapeMismatch {
                        expected: self.n_features,
                        actual: vector.dim(),
                    });
                }
                let label = self
                    .rules
                    .iter()
                    .find(|(column, _)| vector.entries().iter().any(|(c, _)| c == column))
                    .map_or_else(|| self.fallback.clone(), |(_, label)| label.clone());
                Ok(label)
            })
            .collect()
    }
}

/// Misbehaving model that silently drops the last input.
pub struct TruncatingPredictor {
    n_features: usize,
}

impl TruncatingPredictor {
    pub fn new(n_features: usize) -> Self {
        Self { n_features }
    }
}

impl LabelPredictor for TruncatingPredictor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<RawLabel>, InferenceError> {
        Ok(vec![RawLabel::Integer(4); features.len().saturating_sub(1)])
    }
}

/// `great` / `love` → 4, `terrible` / `hate` → 0, anything else → 0.
pub fn keyword_classifier() -> SentimentClassifier {
    SentimentClassifier::new(
        Arc::new(KeywordTransformer::new(&["great", "love", "terrible", "hate"])),
        Arc::new(StaticPredictor::keyword_codes(4, &[(0, 4), (1, 4), (2, 0), (3, 0)])),
    )
}

/// Transformer and model disagree on the feature width.
pub fn mismatched_classifier() -> SentimentClassifier {
    SentimentClassifier::new(
        Arc::new(KeywordTransformer::new(&["great", "love", "terrible"])),
        Arc::new(StaticPredictor::keyword_codes(2, &[(0, 4)])),
    )
}
