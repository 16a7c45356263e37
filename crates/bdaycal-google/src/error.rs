//! Error types for Google API operations.

use std::fmt;
use thiserror::Error;

/// The category of a Google API error.
///
/// Startup (authorization) failures are fatal to the run; submission failures
/// are confined to a single entry. The classification here feeds the log
/// output, not a retry policy - the importer never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoogleErrorCode {
    /// Authentication failed or credentials are invalid/expired.
    AuthenticationFailed,
    /// Authorization failed - user lacks permission.
    AuthorizationFailed,
    /// Network error - connection failed, timeout, DNS resolution, etc.
    NetworkError,
    /// Rate limit exceeded - too many requests.
    RateLimited,
    /// Server returned an error (5xx status codes).
    ServerError,
    /// Invalid response from the server - parse error, unexpected format.
    InvalidResponse,
    /// Request was invalid (400) - bad parameters, malformed payload.
    BadRequest,
    /// Configuration error - missing or invalid credentials/token files.
    ConfigurationError,
    /// Internal error - unexpected state, bug.
    InternalError,
}

impl GoogleErrorCode {
    /// Returns true if this error is transient in nature.
    ///
    /// Informational only; the importer logs and moves on either way.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError | Self::RateLimited | Self::ServerError
        )
    }

    /// Returns a human-readable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthorizationFailed => "authorization_failed",
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::InvalidResponse => "invalid_response",
            Self::BadRequest => "bad_request",
            Self::ConfigurationError => "configuration_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for GoogleErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while talking to Google.
#[derive(Debug, Error)]
pub struct GoogleError {
    /// The error code categorizing this error.
    code: GoogleErrorCode,
    /// A human-readable message describing the error.
    message: String,
    /// The underlying cause of this error, if any.
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GoogleError {
    /// Creates a new error with the given code and message.
    pub fn new(code: GoogleErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::AuthenticationFailed, message)
    }

    /// Creates an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::AuthorizationFailed, message)
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::NetworkError, message)
    }

    /// Creates a rate limit error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::RateLimited, message)
    }

    /// Creates a server error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::ServerError, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::InvalidResponse, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::BadRequest, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::ConfigurationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(GoogleErrorCode::InternalError, message)
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> GoogleErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error is transient in nature.
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for GoogleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for Google API operations.
pub type GoogleResult<T> = Result<T, GoogleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_retryable() {
        assert!(GoogleErrorCode::NetworkError.is_retryable());
        assert!(GoogleErrorCode::RateLimited.is_retryable());
        assert!(GoogleErrorCode::ServerError.is_retryable());
        assert!(!GoogleErrorCode::AuthenticationFailed.is_retryable());
        assert!(!GoogleErrorCode::ConfigurationError.is_retryable());
    }

    #[test]
    fn error_code_display() {
        assert_eq!(
            GoogleErrorCode::AuthenticationFailed.as_str(),
            "authentication_failed"
        );
        assert_eq!(GoogleErrorCode::RateLimited.as_str(), "rate_limited");
    }

    #[test]
    fn error_creation() {
        let err = GoogleError::authentication("token expired");
        assert_eq!(err.code(), GoogleErrorCode::AuthenticationFailed);
        assert_eq!(err.message(), "token expired");
        assert!(!err.is_retryable());
    }

    #[test]
    fn error_display() {
        let err = GoogleError::rate_limited("too many requests");
        let display = format!("{}", err);
        assert!(display.contains("rate_limited"));
        assert!(display.contains("too many requests"));
    }

    #[test]
    fn error_with_source() {
        use std::error::Error;
        let io_err = std::io::Error::other("disk full");
        let err = GoogleError::configuration("failed to save token").with_source(io_err);
        assert!(err.source().is_some());
    }
}
