use thiserror::Error;

/// Errors raised while loading application configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable '{name}': {value}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The unparseable value
        value: String,
    },
}
