use super::FeatureVector;
use crate::domain::RawLabel;
use crate::error::InferenceError;

/// Maps feature vectors to the model's raw class values.
pub trait LabelPredictor: Send + Sync {
    /// Feature width the model was trained on.
    fn n_features(&self) -> usize;

    /// One raw label per vector, in the same order.
    ///
    /// # Errors
    /// Returns [`InferenceError::ShapeMismatch`] when a vector's width differs
    /// from [`LabelPredictor::n_features`].
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<RawLabel>, InferenceError>;
}
