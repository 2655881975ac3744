use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Process-level failures surfaced by `app::run`.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load model artifacts: {0}")]
    Artifact(#[from] LoadError),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// An artifact file could not be turned into a usable transformer or model.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact {} is not valid JSON for this format: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {} is inconsistent: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("artifact {} has an invalid token pattern: {source}", path.display())]
    TokenPattern {
        path: PathBuf,
        #[source]
        source: regex::Error,
    },
}

/// Inference could not produce one label per input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("feature vector has {actual} features but the model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model returned {actual} labels for {expected} inputs")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Failure of a whole analysis request.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("no records to analyze")]
    EmptyInput,

    #[error("classification failed: {0}")]
    Inference(#[from] InferenceError),
}

/// CSV export or import failure.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv output could not be flushed: {0}")]
    Io(#[from] std::io::Error),
}
