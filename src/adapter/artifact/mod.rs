//! JSON exports of the pre-trained scikit-learn artifacts.
//!
//! The vectorizer and the classifier are exported once, offline, into plain
//! JSON and loaded here at start-up. Loading validates internal consistency
//! (vocabulary vs. idf width, coefficient rows vs. classes) so that a broken
//! export fails before the first request rather than during one.

pub mod model;
pub mod vectorizer;

pub use model::SentimentModel;
pub use vectorizer::TextVectorizer;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Read and deserialize one artifact file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn invalid(path: &Path, reason: impl Into<String>) -> LoadError {
    LoadError::Invalid {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
