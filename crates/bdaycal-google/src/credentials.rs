//! Client-application descriptor parsing.
//!
//! The descriptor is the JSON downloaded from the Google Cloud Console OAuth
//! credentials page (`credentials.json`). It carries the client id and secret
//! under an `installed` or `web` section; a flat format with both fields at
//! the root is also accepted.

use std::path::Path;

use serde::Deserialize;

use crate::error::{GoogleError, GoogleResult};

/// OAuth 2.0 client credentials for Google API access.
///
/// Users must provide their own OAuth client ID and secret, as Google
/// requires registered applications for API access.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    /// The OAuth 2.0 client ID from Google Cloud Console.
    pub client_id: String,
    /// The OAuth 2.0 client secret from Google Cloud Console.
    pub client_secret: String,
}

/// Structure of Google's OAuth credentials JSON file.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    /// Credentials for installed (desktop) applications.
    installed: Option<NestedCredentials>,
    /// Credentials for web applications.
    web: Option<NestedCredentials>,
    /// Direct client_id (flat format).
    client_id: Option<String>,
    /// Direct client_secret (flat format).
    client_secret: Option<String>,
}

/// OAuth credentials within a nested section of the credentials JSON file.
#[derive(Debug, Deserialize)]
struct NestedCredentials {
    client_id: String,
    client_secret: String,
}

impl OAuthCredentials {
    /// Creates new OAuth credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Loads the descriptor from a Google Cloud Console JSON file.
    ///
    /// A missing descriptor is fatal to the run: without it neither the
    /// interactive flow nor token persistence can proceed.
    pub fn from_file(path: impl AsRef<Path>) -> GoogleResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GoogleError::configuration(format!(
                "failed to read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parses the descriptor from a JSON string.
    ///
    /// Accepts the Cloud Console format (`installed` or `web` section) and
    /// the flat format with `client_id`/`client_secret` at the root.
    pub fn from_json(json: &str) -> GoogleResult<Self> {
        let file: CredentialsFile = serde_json::from_str(json).map_err(|e| {
            GoogleError::configuration(format!("failed to parse credentials JSON: {}", e))
        })?;

        if let Some(creds) = file.installed.or(file.web) {
            return Ok(Self::new(creds.client_id, creds.client_secret));
        }

        if let (Some(client_id), Some(client_secret)) = (file.client_id, file.client_secret) {
            return Ok(Self::new(client_id, client_secret));
        }

        Err(GoogleError::configuration(
            "credentials file must contain an 'installed'/'web' section or \
             'client_id'/'client_secret' at the root level",
        ))
    }

    /// Validates that the credentials appear to be correctly formatted.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.client_id.is_empty() {
            return Err("client_id is required");
        }
        if !self.client_id.ends_with(".apps.googleusercontent.com") {
            return Err("client_id should end with .apps.googleusercontent.com");
        }
        if self.client_secret.is_empty() {
            return Err("client_secret is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_validation() {
        let valid = OAuthCredentials::new("test-client.apps.googleusercontent.com", "secret");
        assert!(valid.validate().is_ok());

        let empty_id = OAuthCredentials::new("", "secret");
        assert!(empty_id.validate().is_err());

        let bad_id = OAuthCredentials::new("bad-id", "secret");
        assert!(bad_id.validate().is_err());

        let empty_secret = OAuthCredentials::new("test.apps.googleusercontent.com", "");
        assert!(empty_secret.validate().is_err());
    }

    #[test]
    fn credentials_from_json_installed() {
        let json = r#"{
            "installed": {
                "client_id": "test-id.apps.googleusercontent.com",
                "client_secret": "test-secret",
                "project_id": "my-project"
            }
        }"#;

        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "test-id.apps.googleusercontent.com");
        assert_eq!(creds.client_secret, "test-secret");
    }

    #[test]
    fn credentials_from_json_web() {
        let json = r#"{
            "web": {
                "client_id": "web-id.apps.googleusercontent.com",
                "client_secret": "web-secret"
            }
        }"#;

        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "web-id.apps.googleusercontent.com");
    }

    #[test]
    fn credentials_from_json_flat() {
        let json = r#"{
            "client_id": "flat-id.apps.googleusercontent.com",
            "client_secret": "flat-secret"
        }"#;

        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "flat-id.apps.googleusercontent.com");
        assert_eq!(creds.client_secret, "flat-secret");
    }

    #[test]
    fn credentials_from_json_invalid() {
        let result = OAuthCredentials::from_json(r#"{ "other": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn credentials_from_json_malformed() {
        let result = OAuthCredentials::from_json("not json");
        assert!(result.is_err());
    }

    #[test]
    fn credentials_from_missing_file() {
        let result = OAuthCredentials::from_file("/nonexistent/credentials.json");
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().code(),
            crate::error::GoogleErrorCode::ConfigurationError
        );
    }
}
