use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::{error, info};

use super::dashboard::TweetsForm;
use crate::classifier::SentimentClassifier;
use crate::error::AnalyzeError;
use crate::pipeline::analyze;
use crate::view::{EMPTY_INPUT_WARNING, EXPORT_FILENAME};

/// Handler for POST /export
///
/// Re-runs the analysis for the submitted text and returns the table as a
/// CSV attachment, so no results are kept between requests.
pub async fn export_handler(
    State(classifier): State<Arc<SentimentClassifier>>,
    Form(form): Form<TweetsForm>,
) -> Response {
    let result = match analyze(&form.tweets, &classifier) {
        Ok(result) => result,
        Err(AnalyzeError::EmptyInput) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, EMPTY_INPUT_WARNING).into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Sentiment analysis failed: {e}"),
            )
                .into_response();
        }
    };

    match result.to_csv_bytes() {
        Ok(csv) => {
            info!("Exported {} rows as CSV ({} bytes)", result.len(), csv.len());
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{EXPORT_FILENAME}\""),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to write CSV export: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Export failed").into_response()
        }
    }
}
