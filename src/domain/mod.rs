//! Domain models shared by the pipeline, the classifier and the handlers.

pub mod label;
pub mod record;

pub use label::{Label, RawLabel};
pub use record::{Prediction, Record, UNKNOWN_IDENTIFIER};
