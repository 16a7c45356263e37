//! Cached token persistence.
//!
//! A successful interactive consent is persisted as an "authorized user"
//! record so future runs skip the browser entirely. The on-disk JSON is:
//!
//! ```json
//! {
//!   "type": "authorized_user",
//!   "client_id": "...",
//!   "client_secret": "...",
//!   "refresh_token": "..."
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GoogleError, GoogleResult};

/// The `type` field value of a cached token record.
pub const AUTHORIZED_USER_TYPE: &str = "authorized_user";

/// A cached refresh credential, as persisted to the token file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedUser {
    /// Record type tag, always `"authorized_user"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The OAuth 2.0 client ID the refresh token was issued for.
    pub client_id: String,
    /// The matching client secret.
    pub client_secret: String,
    /// The long-lived refresh token.
    pub refresh_token: String,
}

impl AuthorizedUser {
    /// Creates a new authorized-user record.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            kind: AUTHORIZED_USER_TYPE.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// File-backed storage for the cached token.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a token store at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the cached token from disk.
    ///
    /// Returns `Ok(None)` if no token file exists. An unreadable or
    /// unparseable file is an error; the caller decides whether that means
    /// re-authentication.
    pub fn load(&self) -> GoogleResult<Option<AuthorizedUser>> {
        if !self.path.exists() {
            debug!("no token file at {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            GoogleError::configuration(format!("failed to read token file: {}", e))
        })?;

        let user: AuthorizedUser = serde_json::from_str(&content).map_err(|e| {
            GoogleError::configuration(format!("failed to parse token file: {}", e))
        })?;

        info!("loaded cached token from {}", self.path.display());
        Ok(Some(user))
    }

    /// Saves the token to disk.
    ///
    /// Writes to a temp file then renames, and restricts permissions to the
    /// owner on Unix.
    pub fn save(&self, user: &AuthorizedUser) -> GoogleResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                GoogleError::configuration(format!("failed to create token directory: {}", e))
            })?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(user)
            .map_err(|e| GoogleError::internal(format!("failed to serialize token: {}", e)))?;

        fs::write(&temp_path, &content).map_err(|e| {
            GoogleError::configuration(format!("failed to write token file: {}", e))
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            GoogleError::configuration(format!("failed to rename token file: {}", e))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            let _ = fs::set_permissions(&self.path, perms);
        }

        debug!("saved token to {}", self.path.display());
        Ok(())
    }

    /// Removes the token file if it exists.
    pub fn clear(&self) -> GoogleResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                GoogleError::configuration(format!("failed to remove token file: {}", e))
            })?;
            info!("cleared token at {}", self.path.display());
        }
        Ok(())
    }

    /// Returns the token file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorized_user_wire_format() {
        let user = AuthorizedUser::new("id.apps.googleusercontent.com", "secret", "refresh-123");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["type"], "authorized_user");
        assert_eq!(json["client_id"], "id.apps.googleusercontent.com");
        assert_eq!(json["client_secret"], "secret");
        assert_eq!(json["refresh_token"], "refresh-123");
    }

    #[test]
    fn store_save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("token.json");
        let store = TokenStore::new(&path);

        let user = AuthorizedUser::new("id.apps.googleusercontent.com", "secret", "refresh-123");
        store.save(&user).unwrap();
        assert!(path.exists());

        let loaded = TokenStore::new(&path).load().unwrap().unwrap();
        assert_eq!(loaded, user);
    }

    #[test]
    fn store_missing_file_loads_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = TokenStore::new(tmp.path().join("token.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn store_corrupt_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("token.json");
        fs::write(&path, "{ not json").unwrap();

        let result = TokenStore::new(&path).load();
        assert!(result.is_err());
    }

    #[test]
    fn store_clear_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("token.json");
        let store = TokenStore::new(&path);

        store
            .save(&AuthorizedUser::new("id", "secret", "refresh"))
            .unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn store_creates_parent_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("dir").join("token.json");
        let store = TokenStore::new(&path);

        store
            .save(&AuthorizedUser::new("id", "secret", "refresh"))
            .unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("token.json");
        TokenStore::new(&path)
            .save(&AuthorizedUser::new("id", "secret", "refresh"))
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
