//! Server configuration
//!
//! Loaded from environment variables (optionally via a .env file) with
//! defaults suitable for local development.

use std::env;
use std::path::PathBuf;

/// Default port the server listens on
const DEFAULT_PORT: u16 = 3000;

/// Default SQLite database location
const DEFAULT_DATABASE_URL: &str = "sqlite://hashbox.db";

/// Default directory uploaded files are written to
const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid HASHBOX_PORT value: {0}")]
    InvalidPort(String),
}

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Upload storage settings
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory uploads are written to. Created at startup if missing.
    pub upload_dir: PathBuf,
}

/// Authentication settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// API keys seeded into the users table at startup. Users are only
    /// ever provisioned out-of-band; there is no HTTP endpoint for it.
    pub api_keys: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `HASHBOX_PORT`, `DATABASE_URL`, `UPLOAD_DIR`,
    /// `HASHBOX_API_KEYS` (comma-separated). Missing variables fall back
    /// to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("HASHBOX_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

        let api_keys = env::var("HASHBOX_API_KEYS")
            .map(|raw| {
                raw.split(',')
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            server: ServerConfig { port },
            database: DatabaseConfig { url: database_url },
            storage: StorageConfig { upload_dir },
            auth: AuthConfig { api_keys },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: DEFAULT_PORT },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            },
            auth: AuthConfig {
                api_keys: Vec::new(),
            },
        }
    }
}
