//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `FOLIO_HOST` - Bind address (default: 127.0.0.1)
//! - `FOLIO_PORT` - Listen port (default: 3000)
//! - `FOLIO_BASE_URL` - Public URL for the site (default: <http://localhost:3000>)
//! - `FOLIO_STORAGE_PATH` - Content file (default: data/portfolio.json)
//! - `FOLIO_STATIC_DIR` - Stylesheet directory (default: this crate's `static/`)
//! - `FOLIO_ADMIN_PASSWORD` - Admin password (default: admin123)
//! - `FOLIO_RELAY_ENDPOINT` - Mail relay URL for the contact form
//! - `FOLIO_RELAY_TIMEOUT_SECS` - Relay request timeout (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Password used when `FOLIO_ADMIN_PASSWORD` is not set.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/muba4shir@gmail.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// JSON file holding the persisted content
    pub storage_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// The single admin password
    pub admin_password: SecretString,
    /// Contact form mail relay
    pub relay: RelayConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Mail relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Endpoint receiving the JSON submission
    pub endpoint: Url,
    /// Upper bound on one relay request
    pub timeout: Duration,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unset variables take their defaults, so `from_lookup(|_| None)` is
    /// the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = parse_var("FOLIO_HOST", &var("FOLIO_HOST", "127.0.0.1"))?;
        let port = parse_var("FOLIO_PORT", &var("FOLIO_PORT", "3000"))?;
        let base_url = var("FOLIO_BASE_URL", "http://localhost:3000");
        let storage_path = PathBuf::from(var("FOLIO_STORAGE_PATH", "data/portfolio.json"));
        let static_dir = PathBuf::from(var("FOLIO_STATIC_DIR", DEFAULT_STATIC_DIR));
        let admin_password =
            SecretString::from(var("FOLIO_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD));
        if admin_password.expose_secret().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "FOLIO_ADMIN_PASSWORD".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let relay = RelayConfig {
            endpoint: parse_var(
                "FOLIO_RELAY_ENDPOINT",
                &var("FOLIO_RELAY_ENDPOINT", DEFAULT_RELAY_ENDPOINT),
            )?,
            timeout: Duration::from_secs(parse_var(
                "FOLIO_RELAY_TIMEOUT_SECS",
                &var("FOLIO_RELAY_TIMEOUT_SECS", "10"),
            )?),
        };

        Ok(Self {
            host,
            port,
            base_url,
            storage_path,
            static_dir,
            admin_password,
            relay,
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the admin password is still the well-known default.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.admin_password.expose_secret() == DEFAULT_ADMIN_PASSWORD
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
