//! Run configuration.
//!
//! bdaycal is a zero-configuration tool: the three input paths default to
//! the working directory and everything else is fixed. The paths are still
//! carried in an explicit structure (and overridable from the CLI) rather
//! than hard-coded where they are used.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the client-application descriptor (Google Cloud Console JSON).
    pub credentials_path: PathBuf,

    /// Path to the cached token file.
    pub token_path: PathBuf,

    /// Path to the birthday list.
    pub birthdays_path: PathBuf,

    /// Target calendar identifier.
    pub calendar_id: String,

    /// Delay between create-event calls, as a rate-limit courtesy.
    pub pacing: Duration,

    /// HTTP request timeout.
    pub timeout: Duration,
}

impl RunConfig {
    /// Default delay between submissions in milliseconds.
    pub const DEFAULT_PACING_MS: u64 = 2000;

    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from("credentials.json"),
            token_path: PathBuf::from("token.json"),
            birthdays_path: PathBuf::from("birthdays.txt"),
            calendar_id: "primary".to_string(),
            pacing: Duration::from_millis(Self::DEFAULT_PACING_MS),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}
