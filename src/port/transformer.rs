use super::FeatureVector;

/// Turns normalized texts into feature vectors.
///
/// Implementations are loaded once and shared read-only, hence `Send + Sync`.
pub trait FeatureTransformer: Send + Sync {
    /// Width of every vector this transformer produces.
    fn n_features(&self) -> usize;

    /// One vector per text, in the same order.
    fn transform(&self, texts: &[String]) -> Vec<FeatureVector>;
}
