//! Environment-based application configuration.

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PG_HOST: &str = "localhost";
const DEFAULT_PG_PORT: u16 = 5432;
const DEFAULT_APP_HOST: &str = "0.0.0.0";
const DEFAULT_APP_PORT: u16 = 5000;

/// Application configuration loaded from the environment.
///
/// Database identity comes from the `PG_*` variables; `PG_ROLE` is optional
/// and only used to grant database access during first-run bootstrap.
pub struct Config {
    pub pg_host: String,
    pub pg_port: u16,
    pub pg_db: String,
    pub pg_user: String,
    pub pg_user_password: String,
    pub pg_role: Option<String>,

    pub app_host: String,
    pub app_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Required: `PG_DB`, `PG_USER`, `PG_USER_PASSWORD`.
    /// Optional with defaults: `PG_HOST`, `PG_PORT`, `APP_HOST`, `APP_PORT`.
    /// Optional: `PG_ROLE`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Fully loaded configuration
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or unparseable
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            pg_host: optional_var("PG_HOST").unwrap_or_else(|| DEFAULT_PG_HOST.to_string()),
            pg_port: port_var("PG_PORT", DEFAULT_PG_PORT)?,
            pg_db: required_var("PG_DB")?,
            pg_user: required_var("PG_USER")?,
            pg_user_password: required_var("PG_USER_PASSWORD")?,
            pg_role: optional_var("PG_ROLE"),
            app_host: optional_var("APP_HOST").unwrap_or_else(|| DEFAULT_APP_HOST.to_string()),
            app_port: port_var("APP_PORT", DEFAULT_APP_PORT)?,
        })
    }

    /// Connection URL for the application database.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.pg_user, self.pg_user_password, self.pg_host, self.pg_port, self.pg_db
        )
    }

    /// Connection URL for the `postgres` maintenance database, used to create
    /// the application database when it does not exist yet.
    pub fn maintenance_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/postgres",
            self.pg_user, self.pg_user_password, self.pg_host, self.pg_port
        )
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn port_var(name: &str, default: u16) -> Result<u16, ConfigError> {
    match optional_var(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
