//! Runtime configuration.
//!
//! Every setting has a default matching the public PokéAPI and the first-generation roster, so
//! the browser build (where environment lookups always fail) runs on [`Config::default`]. Native
//! builds and tests may override any value through `POKEDEX_*` environment variables.

use std::{fmt::Display, str::FromStr};

use crate::error::ConfigError;

/// Public PokéAPI v2 root.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Covers exactly the first regional generation.
pub const DEFAULT_ROSTER_LIMIT: u32 = 151;
/// Cards per grid page.
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Upper bound on outstanding detail requests during a bulk load.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 25;

/// What a bulk load does when a single detail document fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFailurePolicy {
    /// Abort the whole load with the first failure.
    #[default]
    Abort,
    /// Drop the failed entry, log a warning and keep loading.
    Skip,
}

impl FromStr for DetailFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("expected `abort` or `skip`, got `{other}`")),
        }
    }
}

/// Runtime settings for the roster load and the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// PokéAPI root without a trailing slash.
    pub api_base_url: String,
    /// Entries requested from the listing endpoint.
    pub roster_limit: u32,
    /// Cards per page, at least 1.
    pub page_size: usize,
    /// Detail requests outstanding at once, at least 1.
    pub max_concurrent_fetches: usize,
    pub detail_failure_policy: DetailFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            roster_limit: DEFAULT_ROSTER_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            detail_failure_policy: DetailFailurePolicy::default(),
        }
    }
}

impl Config {
    /// Builds the configuration from `POKEDEX_*` environment variables.
    ///
    /// Unset variables keep their default. A value that does not parse, or a zero where a
    /// positive count is required, is rejected.
    ///
    /// # Returns
    /// - `Ok(Config)` - Defaults overridden by whatever variables were set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable was set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("POKEDEX_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        if api_base_url.is_empty() {
            return Err(invalid("POKEDEX_API_URL", "must not be empty"));
        }

        let config = Self {
            api_base_url,
            roster_limit: parse_var(&lookup, "POKEDEX_ROSTER_LIMIT", defaults.roster_limit)?,
            page_size: parse_var(&lookup, "POKEDEX_PAGE_SIZE", defaults.page_size)?,
            max_concurrent_fetches: parse_var(
                &lookup,
                "POKEDEX_MAX_CONCURRENT_FETCHES",
                defaults.max_concurrent_fetches,
            )?,
            detail_failure_policy: parse_var(
                &lookup,
                "POKEDEX_DETAIL_FAILURE_POLICY",
                defaults.detail_failure_policy,
            )?,
        };

        if config.roster_limit == 0 {
            return Err(invalid("POKEDEX_ROSTER_LIMIT", "must be greater than 0"));
        }
        if config.page_size == 0 {
            return Err(invalid("POKEDEX_PAGE_SIZE", "must be greater than 0"));
        }
        if config.max_concurrent_fetches == 0 {
            return Err(invalid(
                "POKEDEX_MAX_CONCURRENT_FETCHES",
                "must be greater than 0",
            ));
        }

        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(key, &e.to_string())),
        None => Ok(default),
    }
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
