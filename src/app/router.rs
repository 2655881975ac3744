use crate::classifier::SentimentClassifier;
use crate::handler::analyze::analyze_handler;
use crate::handler::dashboard::{analyze_form_handler, index_handler};
use crate::handler::export::export_handler;
use crate::handler::health::health_handler;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::sync::Arc;

/// Build the dashboard router (HTML form, CSV export, JSON API, health).
pub fn main_router(classifier: Arc<SentimentClassifier>, max_input_bytes: usize) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let dashboard_router = Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_form_handler))
        .route("/export", post(export_handler))
        .route("/v1/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(max_input_bytes))
        .with_state(classifier);

    Router::new().merge(v1_health_router).merge(dashboard_router)
}
