use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment shown to the user.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Every label, in display order.
    pub const ALL: [Label; 2] = [Label::Positive, Label::Negative];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class value as stored in the model artifact.
///
/// Sentiment140-style models emit numeric codes (0 / 4), others emit class
/// names; both are accepted and told apart here instead of at every call site.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawLabel {
    Integer(i64),
    Float(f64),
    Text(String),
}

const POSITIVE_CODE: i64 = 4;
const POSITIVE_TEXT: &str = "positive";

impl RawLabel {
    /// Collapse a raw class into the two dashboard labels.
    ///
    /// Only the code `4` and the exact string `"positive"` are positive;
    /// anything else (including neutral codes such as `2`) is negative.
    pub fn to_label(&self) -> Label {
        let positive = match self {
            RawLabel::Integer(code) => *code == POSITIVE_CODE,
            RawLabel::Float(code) => *code == POSITIVE_CODE as f64,
            RawLabel::Text(name) => name == POSITIVE_TEXT,
        };
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl From<&RawLabel> for Label {
    fn from(raw: &RawLabel) -> Self {
        raw.to_label()
    }
}

impl fmt::Display for RawLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawLabel::Integer(code) => write!(f, "{code}"),
            RawLabel::Float(code) => write!(f, "{code}"),
            RawLabel::Text(name) => f.write_str(name),
        }
    }
}
