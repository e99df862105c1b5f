use std::path::PathBuf;

use rust_decimal::Decimal;

/// Shop server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Directory holding `local_storage.redb` |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Daily rolling log files when set |
/// | SHOP_NAME | RAHUL DRY CLEANERS | Printed on bills and messages |
/// | RATE_PER_ITEM | 8 | Default rate (rupees) per garment |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
///
/// ```ignore
/// WORK_DIR=/srv/dhobi HTTP_PORT=8080 cargo run -p dhobi-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub shop_name: String,
    pub rate_per_item: Decimal,
    pub request_timeout_ms: u64,
}

pub const DEFAULT_SHOP_NAME: &str = "RAHUL DRY CLEANERS";
pub const DEFAULT_RATE_PER_ITEM: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// File name of the local store inside `work_dir`
pub const STORE_FILE: &str = "local_storage.redb";

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shop_name: std::env::var("SHOP_NAME").unwrap_or_else(|_| DEFAULT_SHOP_NAME.into()),
            rate_per_item: std::env::var("RATE_PER_ITEM")
                .ok()
                .and_then(|r| r.parse::<Decimal>().ok())
                .filter(|r| !r.is_sign_negative())
                .unwrap_or(DEFAULT_RATE_PER_ITEM),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the work directory and port
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the redb store file
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(STORE_FILE)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
