use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::classifier::SentimentClassifier;
use crate::error::AnalyzeError;
use crate::pipeline::analyze;
use crate::view::{DashboardPage, EMPTY_INPUT_WARNING};

/// Body of the dashboard and export forms.
#[derive(Deserialize, Debug, Default)]
pub struct TweetsForm {
    #[serde(default)]
    pub tweets: String,
}

fn render(page: DashboardPage<'_>, status: StatusCode) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render dashboard: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Handler for GET /
pub async fn index_handler() -> Response {
    render(DashboardPage::blank(), StatusCode::OK)
}

/// Handler for POST /analyze (form submit from the dashboard)
pub async fn analyze_form_handler(
    State(classifier): State<Arc<SentimentClassifier>>,
    Form(form): Form<TweetsForm>,
) -> Response {
    info!(
        "Received dashboard analyze request with body length: {}",
        form.tweets.len()
    );

    match analyze(&form.tweets, &classifier) {
        Ok(result) => render(
            DashboardPage::with_results(&form.tweets, &result),
            StatusCode::OK,
        ),
        Err(AnalyzeError::EmptyInput) => render(
            DashboardPage::with_warning(&form.tweets, EMPTY_INPUT_WARNING),
            StatusCode::OK,
        ),
        Err(e @ AnalyzeError::Inference(_)) => render(
            DashboardPage::with_error(&form.tweets, format!("Sentiment analysis failed: {e}")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    }
}
