use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/tavola | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | ADMIN_USERNAME | admin | Admin console username |
/// | ADMIN_PASSWORD_HASH | (dev hash) | Argon2 hash of the admin password |
/// | JWT_SECRET | (generated in dev) | Token signing secret |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/tavola HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    /// Admin console username
    pub admin_username: String,
    /// Argon2 hash of the admin password
    pub admin_password_hash: String,
}

// Placeholder hash for development runs; matches no password. Set
// ADMIN_PASSWORD_HASH (see `auth::hash_password`) to actually log in.
const DEV_ADMIN_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$uPe0sYQ+pF1rQjJJZdXKbQ$kGidIhmGSSBwAUZh1jVGgVMaYACenjQ6zc2S9d9WFTo";

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults where unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tavola".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password_hash: std::env::var("ADMIN_PASSWORD_HASH").unwrap_or_else(|_| {
                if std::env::var("ENVIRONMENT").as_deref() == Ok("production") {
                    panic!("ADMIN_PASSWORD_HASH must be set in production");
                }
                tracing::warn!("ADMIN_PASSWORD_HASH not set, using development default");
                DEV_ADMIN_HASH.into()
            }),
        }
    }

    /// Override work dir and port, for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the working directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
