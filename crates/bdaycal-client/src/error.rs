//! Client error types.

use std::fmt;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
///
/// These are the fatal ones: anything here aborts the whole run. Per-entry
/// failures during the import loop are logged and skipped instead.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Google API or authorization error.
    Google(bdaycal_google::GoogleError),
    /// IO error (e.g., the birthday file is missing).
    Io(std::io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Google(err) => write!(f, "google error: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Google(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<bdaycal_google::GoogleError> for ClientError {
    fn from(err: bdaycal_google::GoogleError) -> Self {
        Self::Google(err)
    }
}
