use crate::error::DashboardError;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Bind the dashboard address.
pub async fn bind(address: &str) -> Result<TcpListener, DashboardError> {
    TcpListener::bind(address)
        .await
        .map_err(|e| DashboardError::Bind {
            address: address.to_string(),
            source: e,
        })
}

/// Bind `address` and serve until SIGINT/SIGTERM or `shutdown_token` fires.
pub async fn serve(
    app: Router,
    address: &str,
    shutdown_token: CancellationToken,
) -> Result<(), DashboardError> {
    let listener = bind(address).await?;
    serve_listener(listener, app, shutdown_token).await
}

/// Serve on an already bound listener with graceful shutdown.
pub async fn serve_listener(
    listener: TcpListener,
    app: Router,
    shutdown_token: CancellationToken,
) -> Result<(), DashboardError> {
    info!("Dashboard listening on {}", listener.local_addr()?);
    info!("  - GET  /            (dashboard form)");
    info!("  - POST /analyze     (dashboard results)");
    info!("  - POST /export      (CSV download)");
    info!("  - POST /v1/analyze  (JSON API)");
    info!("  - GET  /v1/health   (health check)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                () = shutdown_signal() => shutdown_token.cancel(),
                () = shutdown_token.cancelled() => info!("Shutdown requested"),
            }
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
