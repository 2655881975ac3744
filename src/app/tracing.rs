use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output format of the process logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// `RUST_LOG_FORMAT=json` (or unset) selects JSON, anything else the
    /// human-readable formatter.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("RUST_LOG_FORMAT").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("json") => LogFormat::Json,
            Some(_) => LogFormat::Pretty,
        }
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the INFO default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match LogFormat::from_env() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}
