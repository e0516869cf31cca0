//! Error types for the DDNS updater
//!
//! This module defines all error types used throughout the workspace.

use thiserror::Error;

/// Result type alias for DDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DDNS updater
#[derive(Error, Debug)]
pub enum Error {
    /// A single IP source failed to produce an address
    #[error("IP source error: {0}")]
    IpSource(String),

    /// Every configured IP check endpoint failed
    #[error("All IP check urls failed ({attempted} attempted)")]
    IpSourcesExhausted {
        /// Number of endpoints that were tried
        attempted: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Authentication errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limiting errors
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Hosted zone or record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider-specific error
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create an IP source error
    pub fn ip_source(msg: impl Into<String>) -> Self {
        Self::IpSource(msg.into())
    }

    /// Create an exhaustion error after `attempted` endpoints failed
    pub fn ip_sources_exhausted(attempted: usize) -> Self {
        Self::IpSourcesExhausted { attempted }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether this error was raised before any network activity
    ///
    /// The binary uses this to pick its exit code.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message() {
        let err = Error::ip_sources_exhausted(3);
        assert_eq!(err.to_string(), "All IP check urls failed (3 attempted)");
    }

    #[test]
    fn test_provider_message_is_verbatim() {
        let err = Error::provider("route53", "NoSuchHostedZone: No hosted zone found");
        assert_eq!(
            err.to_string(),
            "Provider error (route53): NoSuchHostedZone: No hosted zone found"
        );
    }

    #[test]
    fn test_is_config() {
        assert!(Error::config("ttl can not be 0").is_config());
        assert!(!Error::ip_sources_exhausted(1).is_config());
    }

    #[test]
    fn test_runtime_errors_are_not_config() {
        let runtime = [
            Error::ip_source("invalid IP:nope"),
            Error::http("http.Get() url:http://a status:503"),
            Error::auth("AccessDenied: denied"),
            Error::rate_limited("Throttling: Rate exceeded"),
            Error::not_found("NoSuchHostedZone: missing"),
            Error::invalid_input("InvalidChangeBatch: bad"),
            Error::provider("route53", "InternalFailure"),
            Error::from(serde_json::from_str::<u32>("x").unwrap_err()),
        ];

        for err in runtime {
            assert!(!err.is_config(), "{err} must not be a config error");
        }
    }
}
