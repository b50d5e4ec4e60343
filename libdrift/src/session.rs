//! Local session cache
//!
//! A successful sign-in is snapshotted to a small JSON file under the config
//! directory and read back at startup. Absence of the file means "no
//! session"; a token is assumed valid until a request using it fails.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::resolve_session_path;
use crate::error::{Result, SessionError};

/// An authenticated identity as returned by the identity service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub username: String,
}

impl Session {
    /// A session is usable while it carries a bearer token. Expiry is only
    /// discovered when a request using the token fails.
    pub fn is_authenticated(&self) -> bool {
        !self.id_token.is_empty()
    }
}

/// Load/save access to the session cache file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default per-user path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: resolve_session_path()?,
        })
    }

    /// Store at an explicit path (tests, overrides).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the cached session. A missing file yields `None`; any other
    /// read or parse failure is an error the caller may downgrade to a
    /// warning.
    pub fn load(&self) -> Result<Option<Session>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionError::Io(err).into()),
        };

        let session: Session = serde_json::from_str(&data).map_err(SessionError::Parse)?;
        Ok(Some(session))
    }

    /// Persist a session snapshot, creating the parent directory if needed.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(SessionError::Io)?;
        }

        let data = serde_json::to_string_pretty(session).map_err(SessionError::Parse)?;
        std::fs::write(&self.path, data).map_err(SessionError::Io)?;
        Ok(())
    }

    /// Remove the cached session. Missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Io(err).into()),
        }
    }
}
