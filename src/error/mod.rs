//! Error types for the Pokédex core.
//!
//! A single [`Error`] aggregates transport failures against the upstream PokéAPI, entries that
//! cannot be normalized, and browser storage failures. Configuration problems are reported
//! separately as [`ConfigError`]. Everything that can fail returns `Result<T, Error>` so callers
//! can propagate with `?`.

pub mod config;

use thiserror::Error;

pub use config::ConfigError;

/// Main error type for the Pokédex core.
///
/// Only bulk roster loads surface these to the user. Locations lookups and preference reads
/// recover locally and log instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or a response body that could not be decoded.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Upstream answered with a non-success status code.
    #[error("Request to {url} failed with status {status}")]
    UnexpectedStatus {
        /// The requested URL.
        url: String,
        /// HTTP status code returned by the provider.
        status: u16,
    },
    /// A detail document that cannot produce a valid roster entry.
    #[error("Malformed entry {name:?}: {reason}")]
    MalformedEntry {
        /// Name reported by the listing or the detail document.
        name: String,
        /// Which invariant was violated.
        reason: String,
    },
    /// The browser key-value store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),
    /// Serializing a preference value failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
