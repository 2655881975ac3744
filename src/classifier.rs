//! Sentiment classifier service: the loaded transformer and model, held for
//! the lifetime of the process and shared by reference with every request.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error};

use crate::adapter::artifact::{SentimentModel, TextVectorizer};
use crate::domain::{Label, RawLabel};
use crate::error::{InferenceError, LoadError};
use crate::port::{FeatureTransformer, LabelPredictor};

pub struct SentimentClassifier {
    transformer: Arc<dyn FeatureTransformer>,
    predictor: Arc<dyn LabelPredictor>,
}

impl SentimentClassifier {
    pub fn new(transformer: Arc<dyn FeatureTransformer>, predictor: Arc<dyn LabelPredictor>) -> Self {
        Self {
            transformer,
            predictor,
        }
    }

    /// Load the vectorizer and model exports from disk.
    ///
    /// The two artifacts are loaded independently; their widths are compared
    /// at inference time, where a mismatch surfaces as
    /// [`InferenceError::ShapeMismatch`].
    ///
    /// # Errors
    /// Returns [`LoadError`] if either file is missing or invalid.
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self, LoadError> {
        let transformer = TextVectorizer::load(vectorizer_path)?;
        let predictor = SentimentModel::load(model_path)?;
        Ok(Self::new(Arc::new(transformer), Arc::new(predictor)))
    }

    /// Raw model output for each normalized text, in input order.
    ///
    /// # Errors
    /// Fails when the transformer and the model disagree on the feature
    /// width, or when the model does not return exactly one label per text.
    pub fn predict_raw(&self, texts: &[String]) -> Result<Vec<RawLabel>, InferenceError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let features = self.transformer.transform(texts);
        let expected = self.predictor.n_features();
        if let Some(mismatch) = features.iter().find(|f| f.dim() != expected) {
            error!(
                expected,
                actual = mismatch.dim(),
                "Transformer output does not match model input width"
            );
            return Err(InferenceError::ShapeMismatch {
                expected,
                actual: mismatch.dim(),
            });
        }

        let raw = self.predictor.predict(&features)?;
        if raw.len() != texts.len() {
            error!(
                inputs = texts.len(),
                outputs = raw.len(),
                "Model returned a different number of labels than inputs"
            );
            return Err(InferenceError::LengthMismatch {
                expected: texts.len(),
                actual: raw.len(),
            });
        }

        debug!(count = raw.len(), "Predicted raw labels");
        Ok(raw)
    }

    /// Dashboard labels for each normalized text, in input order.
    ///
    /// # Errors
    /// See [`SentimentClassifier::predict_raw`].
    pub fn classify(&self, texts: &[String]) -> Result<Vec<Label>, InferenceError> {
        Ok(self
            .predict_raw(texts)?
            .iter()
            .map(RawLabel::to_label)
            .collect())
    }
}
