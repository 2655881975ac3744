use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::{invalid, read_json};
use crate::domain::RawLabel;
use crate::error::{InferenceError, LoadError};
use crate::port::{FeatureVector, LabelPredictor};

#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ModelSpec {
    /// LogisticRegression, LinearSVC, SGDClassifier, ...
    Linear {
        classes: Vec<RawLabel>,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
    },
    MultinomialNb {
        classes: Vec<RawLabel>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    /// One score row: `classes[1]` when positive, else `classes[0]`.
    Threshold,
    /// One score row per class: highest score wins, first on ties.
    ArgMax,
}

/// Linear decision model over the vectorizer's feature space.
#[derive(Debug)]
pub struct SentimentModel {
    classes: Vec<RawLabel>,
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
    decision: Decision,
    n_features: usize,
}

impl SentimentModel {
    /// Load and validate a classifier export.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the file is missing, malformed, or its
    /// coefficient shapes do not agree with its class list.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let spec: ModelSpec = read_json(path)?;
        let model = Self::build(spec, path)?;
        info!(
            path = %path.display(),
            classes = model.classes.len(),
            n_features = model.n_features,
            "Loaded sentiment model"
        );
        Ok(model)
    }

    fn build(spec: ModelSpec, path: &Path) -> Result<Self, LoadError> {
        let (classes, weights, bias, decision) = match spec {
            ModelSpec::Linear {
                classes,
                coef,
                intercept,
            } => {
                let decision = match (coef.len(), classes.len()) {
                    (1, 2) => Decision::Threshold,
                    (rows, n_classes) if rows == n_classes && rows >= 2 => Decision::ArgMax,
                    (rows, n_classes) => {
                        return Err(invalid(
                            path,
                            format!("{rows} coefficient rows cannot score {n_classes} classes"),
                        ));
                    }
                };
                (classes, coef, intercept, decision)
            }
            ModelSpec::MultinomialNb {
                classes,
                class_log_prior,
                feature_log_prob,
            } => {
                if classes.len() < 2 || feature_log_prob.len() != classes.len() {
                    return Err(invalid(
                        path,
                        format!(
                            "{} feature_log_prob rows for {} classes",
                            feature_log_prob.len(),
                            classes.len()
                        ),
                    ));
                }
                (classes, feature_log_prob, class_log_prior, Decision::ArgMax)
            }
        };

        if bias.len() != weights.len() {
            return Err(invalid(
                path,
                format!(
                    "{} bias terms for {} coefficient rows",
                    bias.len(),
                    weights.len()
                ),
            ));
        }

        let n_features = weights.first().map_or(0, Vec::len);
        if n_features == 0 {
            return Err(invalid(path, "coefficient rows are empty"));
        }
        if weights.iter().any(|row| row.len() != n_features) {
            return Err(invalid(path, "coefficient rows have different widths"));
        }

        Ok(Self {
            classes,
            weights,
            bias,
            decision,
            n_features,
        })
    }

    pub fn classes(&self) -> &[RawLabel] {
        &self.classes
    }

    fn scores(&self, features: &FeatureVector) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| features.dot(row) + bias)
            .collect()
    }

    fn predict_one(&self, features: &FeatureVector) -> Result<RawLabel, InferenceError> {
        if features.dim() != self.n_features {
            return Err(InferenceError::ShapeMismatch {
                expected: self.n_features,
                actual: features.dim(),
            });
        }

        let scores = self.scores(features);
        let index = match self.decision {
            Decision::Threshold => usize::from(scores[0] > 0.0),
            Decision::ArgMax => arg_max(&scores),
        };
        Ok(self.classes[index].clone())
    }
}

fn arg_max(scores: &[f64]) -> usize {
    let mut best = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = index;
        }
    }
    best
}

impl LabelPredictor for SentimentModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<RawLabel>, InferenceError> {
        features.iter().map(|f| self.predict_one(f)).collect()
    }
}
