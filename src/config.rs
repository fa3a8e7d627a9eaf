//! Monitor configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Top-level monitor configuration.
///
/// Loaded once at startup via [`MonitorConfig::from_env`].
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string. Defaults to a local database file,
    /// created on first run.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Allowed CORS origins; a single `*` entry allows any origin.
    pub cors_origins: Vec<String>,

    /// Trailing window in minutes for efficiency computations.
    pub window_minutes: i64,

    /// Directory of static assets served at the root path.
    pub static_dir: PathBuf,
}

impl MonitorConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .context("invalid LISTEN_ADDR")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://packer_monitor.db?mode=rwc".to_string());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let window_minutes = parse_env("WINDOW_MINUTES", 120);

        let static_dir = PathBuf::from(
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        );

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            cors_origins,
            window_minutes,
            static_dir,
        })
    }

    /// Whether the CORS configuration allows any origin.
    #[must_use]
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
