//! Error types for the cart crate.
//!
//! The engine itself is infallible toward its callers; these errors only
//! surface at the persistence and configuration boundaries.

use thiserror::Error;

/// Errors raised by a [`crate::store::KeyValueStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O error for key {key:?}: {source}")]
    Io {
        /// The storage key being accessed.
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be serialized for writing.
    #[error("failed to serialize collection {key:?}: {source}")]
    Serialize {
        /// The storage key being written.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}
