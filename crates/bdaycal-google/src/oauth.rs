//! OAuth 2.0 PKCE flow for Google APIs.
//!
//! Implements the Authorization Code flow with PKCE (RFC 7636), using a
//! loopback redirect for desktop applications:
//!
//! 1. Generate a code verifier and its SHA-256 challenge
//! 2. Start a local HTTP server on an available port
//! 3. Open the user's browser to Google's consent page
//! 4. Extract the authorization code from the redirect
//! 5. Exchange the code (with verifier) for access and refresh tokens
//!
//! The loopback server only accepts localhost connections, and the state
//! parameter guards against CSRF.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng as _;
use sha2::{Digest, Sha256};
use tracing::{debug, error, info, warn};

use crate::credentials::OAuthCredentials;
use crate::error::{GoogleError, GoogleResult};

/// Google OAuth endpoints.
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// The PKCE code verifier length (in bytes, before base64 encoding).
const CODE_VERIFIER_LENGTH: usize = 32;

/// Timeout for waiting for the OAuth callback.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(300); // 5 minutes

/// Tokens obtained from a code exchange.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    /// Short-lived access token for API requests.
    pub access_token: String,
    /// Long-lived refresh token, if Google issued one.
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    pub expires_in: Option<i64>,
}

/// OAuth client for Google APIs.
///
/// Handles the interactive PKCE consent flow and refresh-token exchanges.
#[derive(Debug)]
pub struct OAuthFlow {
    credentials: OAuthCredentials,
    http_client: reqwest::Client,
}

impl OAuthFlow {
    /// Creates a new OAuth flow with the given client credentials.
    pub fn new(credentials: OAuthCredentials, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            credentials,
            http_client,
        }
    }

    /// Runs the interactive consent flow and returns the obtained tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if no loopback port is available, the user denies
    /// authorization, the callback times out, or the token exchange fails.
    pub async fn authorize(
        &self,
        scopes: &[String],
        port_range: (u16, u16),
    ) -> GoogleResult<TokenGrant> {
        let pkce = PkceChallenge::new();

        let (listener, port) = Self::bind_loopback_server(port_range)?;
        let redirect_uri = format!("http://127.0.0.1:{}/callback", port);

        let auth_url = pkce.build_auth_url(&self.credentials.client_id, &redirect_uri, scopes);

        info!("starting OAuth flow, opening browser...");
        debug!("authorization URL: {}", auth_url);

        if let Err(e) = open::that(&auth_url) {
            warn!("failed to open browser: {}", e);
            eprintln!("\nPlease open this URL in your browser:\n\n{}\n", auth_url);
        }

        let (code, received_state) = Self::wait_for_callback(listener)?;

        if received_state != pkce.state {
            return Err(GoogleError::authentication(
                "OAuth state mismatch - possible CSRF attack",
            ));
        }

        info!("received authorization code, exchanging for tokens...");

        self.exchange_code(&code, &pkce.verifier, &redirect_uri).await
    }

    /// Exchanges a refresh token for a fresh access token.
    pub async fn refresh(&self, refresh_token: &str) -> GoogleResult<String> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .http_client
            .post(GOOGLE_TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| GoogleError::network(format!("token refresh request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GoogleError::network(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GoogleError::authentication(format!(
                "token refresh failed ({}): {}",
                status, body
            )));
        }

        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| GoogleError::invalid_response(format!("invalid token response: {}", e)))?;

        info!("successfully refreshed access token");
        Ok(token_response.access_token)
    }

    /// Exchanges an authorization code for tokens.
    async fn exchange_code(
        &self,
        code: &str,
        verifier: &str,
        redirect_uri: &str,
    ) -> GoogleResult<TokenGrant> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri),
        ];

        let response = self
            .http_client
            .post(GOOGLE_TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| GoogleError::network(format!("token exchange request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GoogleError::network(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GoogleError::authentication(format!(
                "token exchange failed ({}): {}",
                status, body
            )));
        }

        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| GoogleError::invalid_response(format!("invalid token response: {}", e)))?;

        info!("successfully obtained tokens");
        Ok(TokenGrant {
            access_token: token_response.access_token,
            refresh_token: token_response.refresh_token,
            expires_in: token_response.expires_in,
        })
    }

    /// Tries to bind a TCP listener on an available port in the given range.
    fn bind_loopback_server(port_range: (u16, u16)) -> GoogleResult<(TcpListener, u16)> {
        for port in port_range.0..=port_range.1 {
            match TcpListener::bind(format!("127.0.0.1:{}", port)) {
                Ok(listener) => {
                    debug!("bound loopback server on port {}", port);
                    return Ok((listener, port));
                }
                Err(_) => continue,
            }
        }
        Err(GoogleError::configuration(format!(
            "no available port in range {}-{}",
            port_range.0, port_range.1
        )))
    }

    /// Waits for the OAuth callback and extracts the authorization code.
    fn wait_for_callback(listener: TcpListener) -> GoogleResult<(String, String)> {
        listener
            .set_nonblocking(false)
            .map_err(|e| GoogleError::internal(format!("failed to set blocking: {}", e)))?;

        let (tx, rx) = mpsc::channel();

        // Handle the callback in a separate thread to allow timeout
        let _handle = thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => {
                        if let Some(result) = Self::handle_callback(stream) {
                            let _ = tx.send(result);
                            return;
                        }
                    }
                    Err(e) => {
                        error!("failed to accept connection: {}", e);
                    }
                }
            }
        });

        match rx.recv_timeout(CALLBACK_TIMEOUT) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                Err(GoogleError::authentication("OAuth callback timeout"))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(GoogleError::internal("callback channel disconnected"))
            }
        }
    }

    /// Handles an incoming HTTP request on the callback server.
    fn handle_callback(mut stream: TcpStream) -> Option<GoogleResult<(String, String)>> {
        let mut reader = BufReader::new(&stream);
        let mut request_line = String::new();

        if reader.read_line(&mut request_line).is_err() {
            return None;
        }

        // Request line: GET /callback?code=...&state=... HTTP/1.1
        let parts: Vec<&str> = request_line.split_whitespace().collect();
        if parts.len() < 2 || parts[0] != "GET" {
            return None;
        }

        let path = parts[1];
        if !path.starts_with("/callback") {
            return None;
        }

        let query_start = path.find('?').map(|i| i + 1).unwrap_or(path.len());
        let query = &path[query_start..];

        let mut code = None;
        let mut state = None;
        let mut error = None;

        for param in query.split('&') {
            let mut kv = param.splitn(2, '=');
            if let (Some(key), Some(value)) = (kv.next(), kv.next()) {
                match key {
                    "code" => {
                        code = Some(urlencoding::decode(value).unwrap_or_default().into_owned());
                    }
                    "state" => {
                        state = Some(urlencoding::decode(value).unwrap_or_default().into_owned());
                    }
                    "error" => {
                        error = Some(urlencoding::decode(value).unwrap_or_default().into_owned());
                    }
                    _ => {}
                }
            }
        }

        let response = if error.is_some() || code.is_none() {
            "HTTP/1.1 400 Bad Request\r\nContent-Type: text/html\r\n\r\n\
            <html><body><h1>Authorization Failed</h1>\
            <p>You can close this window.</p></body></html>"
        } else {
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n\
            <html><body><h1>Authorization Successful</h1>\
            <p>You can close this window and return to the terminal.</p></body></html>"
        };

        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();

        if let Some(error) = error {
            return Some(Err(GoogleError::authentication(format!(
                "authorization denied: {}",
                error
            ))));
        }

        match (code, state) {
            (Some(c), Some(s)) => Some(Ok((c, s))),
            (Some(c), None) => Some(Ok((c, String::new()))),
            _ => Some(Err(GoogleError::authentication(
                "missing authorization code in callback",
            ))),
        }
    }
}

/// PKCE verifier/challenge pair plus the CSRF state.
#[derive(Debug)]
pub struct PkceChallenge {
    /// The code verifier (high-entropy random string).
    pub verifier: String,
    /// The code challenge (SHA-256 hash of verifier, base64url encoded).
    pub challenge: String,
    /// Random state for CSRF protection.
    pub state: String,
}

impl PkceChallenge {
    /// Creates a new challenge with random verifier and state.
    pub fn new() -> Self {
        let verifier = Self::generate_verifier();
        let challenge = Self::compute_challenge(&verifier);
        let state = Self::generate_state();

        Self {
            verifier,
            challenge,
            state,
        }
    }

    fn generate_verifier() -> String {
        let mut rng = rand::rng();
        let bytes: Vec<u8> = (0..CODE_VERIFIER_LENGTH).map(|_| rng.random()).collect();
        URL_SAFE_NO_PAD.encode(&bytes)
    }

    fn compute_challenge(verifier: &str) -> String {
        let digest = Sha256::digest(verifier.as_bytes());
        URL_SAFE_NO_PAD.encode(digest)
    }

    fn generate_state() -> String {
        let mut rng = rand::rng();
        let bytes: Vec<u8> = (0..16).map(|_| rng.random()).collect();
        URL_SAFE_NO_PAD.encode(&bytes)
    }

    /// Builds the Google OAuth authorization URL.
    ///
    /// `access_type=offline` with `prompt=consent` makes Google issue a
    /// refresh token, which is what gets persisted for future runs.
    pub fn build_auth_url(
        &self,
        client_id: &str,
        redirect_uri: &str,
        scopes: &[String],
    ) -> String {
        let scope = scopes.join(" ");

        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&\
            code_challenge={}&code_challenge_method=S256&state={}&\
            access_type=offline&prompt=consent",
            GOOGLE_AUTH_URL,
            urlencoding::encode(client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(&scope),
            urlencoding::encode(&self.challenge),
            urlencoding::encode(&self.state),
        )
    }
}

impl Default for PkceChallenge {
    fn default() -> Self {
        Self::new()
    }
}

/// Response from Google's token endpoint.
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pkce_verifier_length() {
        let pkce = PkceChallenge::new();
        // Base64 encoding of 32 bytes = 43 characters (no padding)
        assert_eq!(pkce.verifier.len(), 43);
    }

    #[test]
    fn pkce_challenge_is_deterministic() {
        let verifier = "test-verifier-string";
        let challenge1 = PkceChallenge::compute_challenge(verifier);
        let challenge2 = PkceChallenge::compute_challenge(verifier);
        assert_eq!(challenge1, challenge2);
    }

    #[test]
    fn pkce_challenge_differs_for_different_verifiers() {
        let a = PkceChallenge::new();
        let b = PkceChallenge::new();
        assert_ne!(a.challenge, b.challenge);
    }

    #[test]
    fn pkce_state_is_random() {
        let a = PkceChallenge::new();
        let b = PkceChallenge::new();
        assert_ne!(a.state, b.state);
    }

    #[test]
    fn auth_url_format() {
        let pkce = PkceChallenge::new();
        let url = pkce.build_auth_url(
            "test-client.apps.googleusercontent.com",
            "http://127.0.0.1:8080/callback",
            &["https://www.googleapis.com/auth/calendar".to_string()],
        );

        assert!(url.starts_with(GOOGLE_AUTH_URL));
        assert!(url.contains("client_id="));
        assert!(url.contains("redirect_uri="));
        assert!(url.contains("code_challenge="));
        assert!(url.contains("code_challenge_method=S256"));
        assert!(url.contains("state="));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("prompt=consent"));
    }

    #[test]
    fn token_response_without_refresh_token() {
        let json = r#"{"access_token": "at", "expires_in": 3599}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "at");
        assert!(response.refresh_token.is_none());
        assert_eq!(response.expires_in, Some(3599));
    }
}
