use serde::{Deserialize, Serialize};

use super::Label;

/// Identifier assigned to lines that carry no `id,` prefix.
pub const UNKNOWN_IDENTIFIER: &str = "Unknown";

/// One submitted line, split into its identifier and the untouched text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub identifier: String,
    pub raw_text: String,
}

impl Record {
    pub fn new(identifier: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Record for a line without an identifier.
    pub fn unidentified(raw_text: impl Into<String>) -> Self {
        Self::new(UNKNOWN_IDENTIFIER, raw_text)
    }

    /// Attach the predicted label, consuming the record.
    #[must_use]
    pub fn into_prediction(self, label: Label) -> Prediction {
        Prediction {
            identifier: self.identifier,
            raw_text: self.raw_text,
            label,
        }
    }
}

/// A record together with its sentiment. `raw_text` is the text as the user
/// typed it, not the normalized form fed to the model.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    pub identifier: String,
    pub raw_text: String,
    pub label: Label,
}
