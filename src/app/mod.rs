mod router;
pub mod server;
mod state;
pub mod tracing;

pub use router::main_router;
pub use state::AppState;

use crate::config;
use crate::error::DashboardError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration and the
/// classifier, then serves the dashboard.
pub async fn run() -> Result<(), DashboardError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        model = %settings.model_path.display(),
        vectorizer = %settings.vectorizer_path.display(),
        "Loaded settings"
    );

    let app_state = AppState::from_settings(&settings)
        .inspect_err(|e| ::tracing::error!("Failed to load model artifacts: {e}"))?;

    let app = router::main_router(app_state.classifier, settings.max_input_bytes);

    server::serve(app, &settings.bind_address(), CancellationToken::new()).await
}
