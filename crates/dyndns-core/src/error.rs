//! Error types for the dynamic-DNS sync system
//!
//! One taxonomy shared across the workspace. Two outcomes deliberately are
//! NOT errors here:
//!
//! - Rate limiting: a throttled lookup silently serves the cached
//!   snapshot, even an absent one.
//! - "No matching record": surfaced as `Ok(None)` from
//!   [`crate::traits::DnsBackend::get_record`], never as an error and
//!   never as a zero-valued record.

use thiserror::Error;

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the dynamic-DNS sync system
#[derive(Error, Debug)]
pub enum Error {
    /// Provider/network call failure (page fetch, change submission).
    ///
    /// Propagated unmodified to the immediate caller; never retried
    /// internally. Retry policy belongs to the caller.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider-reported failure
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// IP detection failure
    #[error("IP source error: {0}")]
    IpSource(String),

    /// Authentication/credential failure
    ///
    /// Only raised while constructing a provider client. Fatal: a backend
    /// can never be built on top of a client that failed to construct.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create an IP source error
    pub fn ip_source(msg: impl Into<String>) -> Self {
        Self::IpSource(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
