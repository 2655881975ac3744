use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8501;
const DEFAULT_MODEL_PATH: &str = "sentiment_model.json";
const DEFAULT_VECTORIZER_PATH: &str = "vectorizer.json";
const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the dashboard binds to
    pub http_host: IpAddr,
    pub http_port: u16,
    /// Exported classifier (linear / naive Bayes coefficients)
    pub model_path: PathBuf,
    /// Exported vectorizer (vocabulary, idf)
    pub vectorizer_path: PathBuf,
    /// Upper bound for a submitted batch, in bytes
    pub max_input_bytes: usize,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_port("HTTP_PORT", self.http_port)?;
        validate_path("SENTIMENT_MODEL_PATH", &self.model_path)?;
        validate_path("SENTIMENT_VECTORIZER_PATH", &self.vectorizer_path)?;
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_INPUT_BYTES",
                source: anyhow::anyhow!("must be greater than zero"),
            });
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        match self.http_host {
            IpAddr::V4(ip) => format!("{ip}:{}", self.http_port),
            IpAddr::V6(ip) => format!("[{ip}]:{}", self.http_port),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_host: IpAddr::from([0, 0, 0, 0]),
            http_port: DEFAULT_HTTP_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            vectorizer_path: PathBuf::from(DEFAULT_VECTORIZER_PATH),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(name: &'static str, port: u16) -> Result<(), ConfigError> {
    if port == 0 {
        return Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("Port cannot be 0"),
        });
    }
    Ok(())
}

fn validate_path(name: &'static str, path: &std::path::Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("Path cannot be empty"),
        });
    }
    Ok(())
}

fn parse_or<T>(name: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.trim().parse::<T>().map_err(|error| ConfigError::Invalid {
        name,
        source: anyhow::Error::new(error),
    })
}

fn path_or(name: &'static str, default: &str) -> PathBuf {
    PathBuf::from(env::var(name).unwrap_or_else(|_| default.to_string()))
}

/// Read settings from the environment, falling back to defaults, and
/// validate them.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let settings = Settings {
        http_host: parse_or("HTTP_HOST", DEFAULT_HTTP_HOST)?,
        http_port: parse_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())?,
        model_path: path_or("SENTIMENT_MODEL_PATH", DEFAULT_MODEL_PATH),
        vectorizer_path: path_or("SENTIMENT_VECTORIZER_PATH", DEFAULT_VECTORIZER_PATH),
        max_input_bytes: parse_or("MAX_INPUT_BYTES", &DEFAULT_MAX_INPUT_BYTES.to_string())?,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
