use crate::classifier::SentimentClassifier;
use crate::config::Settings;
use crate::error::LoadError;
use std::sync::Arc;

/// Shared application state holding the loaded classifier.
pub struct AppState {
    pub classifier: Arc<SentimentClassifier>,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    ///
    /// Loads both model artifacts; a missing or broken file aborts start-up.
    pub fn from_settings(settings: &Settings) -> Result<Self, LoadError> {
        let classifier =
            SentimentClassifier::load(&settings.vectorizer_path, &settings.model_path)?;
        Ok(Self {
            classifier: Arc::new(classifier),
        })
    }
}
