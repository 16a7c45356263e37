//! Google Calendar collaborator.
//!
//! This crate owns everything that talks to Google:
//!
//! - [`Authorizer`] - loads a cached refresh token or runs the interactive
//!   OAuth 2.0 PKCE consent flow, and persists the result
//! - [`CalendarClient`] - Calendar API v3 client for event insertion
//! - [`OAuthCredentials`] - the client-application descriptor
//!   (`credentials.json` from the Google Cloud Console)
//! - [`GoogleError`] - error types for all of the above
//!
//! The importer treats this crate as an external collaborator: it calls
//! [`Authorizer::obtain_credential`] once at startup and then submits events
//! through the [`CalendarClient`] it builds from the credential.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod oauth;
pub mod tokens;

pub use auth::{Authorizer, Credential};
pub use client::CalendarClient;
pub use credentials::OAuthCredentials;
pub use error::{GoogleError, GoogleErrorCode, GoogleResult};
pub use tokens::{AuthorizedUser, TokenStore};
