pub mod feature;
pub mod predictor;
pub mod transformer;

pub use feature::FeatureVector;
pub use predictor::LabelPredictor;
pub use transformer::FeatureTransformer;
