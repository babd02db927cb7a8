//! Explicit client session state
//!
//! The session holds the bearer token plus the display fields the server
//! returned at login. Persistence happens only through `load` and `store`;
//! nothing in this crate touches the storage path between calls.

use crate::error::ClientError;
use bloglist_shared::types::LoginResponse;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A logged-in user's client-side state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub name: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            username: response.username,
            name: response.name,
        }
    }
}

impl Session {
    /// Load a previously stored session; `None` when none was stored
    pub fn load(path: &Path) -> Result<Option<Session>, ClientError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the session for a later `load`
    pub fn store(&self, path: &Path) -> Result<(), ClientError> {
        fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    /// Remove any stored session (logout)
    pub fn clear(path: &Path) -> Result<(), ClientError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The Authorization header value for this session
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
