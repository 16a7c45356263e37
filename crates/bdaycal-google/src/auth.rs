//! Credential acquisition.
//!
//! [`Authorizer`] implements the one operation the importer needs:
//! [`obtain_credential`](Authorizer::obtain_credential). It either derives an
//! access token from the cached refresh token, or runs the interactive
//! consent flow and caches the result for future runs.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::credentials::OAuthCredentials;
use crate::error::{GoogleError, GoogleResult};
use crate::oauth::OAuthFlow;
use crate::tokens::{AuthorizedUser, TokenStore};

/// Default OAuth scopes: read/write access to the primary calendar and its
/// events.
pub const DEFAULT_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/calendar",
    "https://www.googleapis.com/auth/calendar.events.readonly",
    "https://www.googleapis.com/auth/calendar.events",
];

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default port range for the loopback OAuth server.
pub const DEFAULT_PORT_RANGE: (u16, u16) = (8080, 8090);

/// An access credential for one run.
///
/// Owned by the importer for the duration of the run and never mutated;
/// there is no mid-run refresh.
#[derive(Debug, Clone)]
pub struct Credential {
    access_token: String,
}

impl Credential {
    /// Returns the bearer access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// Obtains and persists access credentials.
#[derive(Debug)]
pub struct Authorizer {
    credentials: OAuthCredentials,
    token_store: TokenStore,
    scopes: Vec<String>,
    port_range: (u16, u16),
    timeout: Duration,
}

impl Authorizer {
    /// Creates a new authorizer from a client-application descriptor and a
    /// token cache path.
    pub fn new(credentials: OAuthCredentials, token_path: impl Into<PathBuf>) -> GoogleResult<Self> {
        credentials
            .validate()
            .map_err(|e| GoogleError::configuration(format!("invalid credentials: {}", e)))?;

        Ok(Self {
            credentials,
            token_store: TokenStore::new(token_path),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            port_range: DEFAULT_PORT_RANGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets the OAuth scopes to request.
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Sets the loopback port range for the consent flow.
    #[must_use]
    pub fn with_port_range(mut self, start: u16, end: u16) -> Self {
        self.port_range = (start, end);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns true if a cached token record exists on disk.
    pub fn has_cached_token(&self) -> bool {
        self.token_store.path().exists()
    }

    /// Obtains an access credential.
    ///
    /// If a cached token record is present and parseable, an access token is
    /// derived from its refresh token with no interactive step. Otherwise the
    /// interactive consent flow runs and the resulting refresh token is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Fatal to the whole run: rejected consent, a failed token exchange, or
    /// an unwritable token path.
    pub async fn obtain_credential(&self) -> GoogleResult<Credential> {
        match self.token_store.load() {
            Ok(Some(user)) => return self.refresh_from_cache(&user).await,
            Ok(None) => {}
            Err(e) => {
                warn!("ignoring unreadable token cache: {}", e);
            }
        }

        self.authorize_interactive().await
    }

    /// Runs the interactive consent flow unconditionally and caches the
    /// result.
    pub async fn authorize_interactive(&self) -> GoogleResult<Credential> {
        let flow = OAuthFlow::new(self.credentials.clone(), self.timeout);
        let grant = flow.authorize(&self.scopes, self.port_range).await?;

        match grant.refresh_token {
            Some(ref refresh_token) => {
                let user = AuthorizedUser::new(
                    &self.credentials.client_id,
                    &self.credentials.client_secret,
                    refresh_token,
                );
                self.token_store.save(&user)?;
                info!("cached refresh token at {}", self.token_store.path().display());
            }
            None => {
                warn!("no refresh token issued; next run will need consent again");
            }
        }

        Ok(Credential {
            access_token: grant.access_token,
        })
    }

    /// Derives an access token from a cached refresh token.
    ///
    /// The cached record carries its own client id and secret, so the refresh
    /// works even if the descriptor file changed since the token was saved.
    async fn refresh_from_cache(&self, user: &AuthorizedUser) -> GoogleResult<Credential> {
        let credentials = OAuthCredentials::new(&user.client_id, &user.client_secret);
        let flow = OAuthFlow::new(credentials, self.timeout);
        let access_token = flow.refresh(&user.refresh_token).await?;

        Ok(Credential { access_token })
    }
}
