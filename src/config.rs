use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_FALLBACK_PATH: &str = "portfolio_fallback.json";
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Environment-derived configuration for the subsystem.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub firebase_project_id: String,
    pub firebase_api_key: String,
    pub firebase_storage_bucket: String,
    pub admin_password: String,
    pub fallback_path: PathBuf,
    pub remote_timeout: Duration,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

impl AppConfig {
    /// Read configuration from the process environment, loading `.env`
    /// first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let fallback_path = std::env::var("PORTFOLIO_FALLBACK_PATH")
            .unwrap_or_else(|_| DEFAULT_FALLBACK_PATH.to_string());

        let remote_timeout = match std::env::var("REMOTE_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                    name: "REMOTE_TIMEOUT_SECS",
                    value: raw,
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
        };

        Ok(Self {
            firebase_project_id: required("FIREBASE_PROJECT_ID")?,
            firebase_api_key: required("FIREBASE_API_KEY")?,
            firebase_storage_bucket: required("FIREBASE_STORAGE_BUCKET")?,
            admin_password: required("ADMIN_PASSWORD")?,
            fallback_path: PathBuf::from(fallback_path),
            remote_timeout,
        })
    }
}
