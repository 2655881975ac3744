use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use crate::classifier::SentimentClassifier;
use crate::error::AnalyzeError;
use crate::pipeline::{ResultSet, analyze};
use crate::view::EMPTY_INPUT_WARNING;

#[derive(Deserialize, Debug)]
pub struct AnalyzeRequest {
    /// Newline-separated `id, tweet` lines
    pub text: String,
}

/// Handler for POST /v1/analyze
///
/// Responds with `{"rows": [...], "counts": {"Positive": n, "Negative": n}}`.
pub async fn analyze_handler(
    State(classifier): State<Arc<SentimentClassifier>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ResultSet>, (StatusCode, Json<Value>)> {
    info!(
        "Received analyze request with body length: {}",
        request.text.len()
    );

    analyze(&request.text, &classifier)
        .map(Json)
        .map_err(|e| match e {
            AnalyzeError::EmptyInput => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "warning": EMPTY_INPUT_WARNING })),
            ),
            AnalyzeError::Inference(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ),
        })
}
