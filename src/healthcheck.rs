use std::time::Duration;
use thiserror::Error;

use crate::config::DEFAULT_HTTP_PORT;

/// The dashboard did not answer `/v1/health` with a 2xx.
#[derive(Error, Debug)]
#[error("Healthcheck failed: {0}")]
pub struct HealthcheckError(String);

/// Perform a health check against `HTTP_PORT` (default 8501)
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    let port = resolve_port(std::env::var("HTTP_PORT").ok().as_deref())?;
    healthcheck_with_port(port).await
}

fn resolve_port(raw: Option<&str>) -> Result<u16, HealthcheckError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HTTP_PORT),
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|e| HealthcheckError(format!("Invalid HTTP_PORT {raw:?}: {e}"))),
    }
}

/// Perform a health check against a specific port
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(|e| HealthcheckError(format!("Failed to create HTTP client: {e}")))?;

    let url = health_url(port);

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| HealthcheckError(format!("Request failed: {e}")))?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(HealthcheckError(format!(
            "Health endpoint returned status: {}",
            resp.status()
        )))
    }
}

fn health_url(port: u16) -> String {
    format!("http://127.0.0.1:{port}/v1/health")
}
