use thiserror::Error;

/// Configuration errors raised while reading `POKEDEX_*` variables.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
