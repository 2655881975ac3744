#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod app;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod healthcheck;
pub mod pipeline;
pub mod port;
pub mod test_support;
pub mod view;

pub use classifier::SentimentClassifier;
pub use healthcheck::{healthcheck, healthcheck_with_port};
pub use pipeline::{ResultSet, analyze};
