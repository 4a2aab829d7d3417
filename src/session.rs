//! Session configuration - the base URL and token used for invocations
//!
//! Read once at startup from `~/.scout/session.yaml`; immutable afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_URL;

/// Base URL and API key for the explored service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            api_url: String::from(DEFAULT_API_URL),
            api_key: String::new(),
        }
    }
}

impl Session {
    /// Load the session file, falling back to built-in defaults when it
    /// is missing or unreadable.
    pub fn load() -> Self {
        let path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".scout")
            .join("session.yaml");

        Self::load_from(&path).unwrap_or_default()
    }

    fn load_from(path: &Path) -> Result<Session> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_session_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        fs::write(
            &path,
            "api_url: https://api.internal.test/v1\napi_key: secret-token\n",
        )
        .unwrap();

        let session = Session::load_from(&path).unwrap();
        assert_eq!(session.api_url, "https://api.internal.test/v1");
        assert_eq!(session.api_key, "secret-token");
    }

    #[test]
    fn missing_api_key_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        fs::write(&path, "api_url: https://api.internal.test/v1\n").unwrap();

        let session = Session::load_from(&path).unwrap();
        assert_eq!(session.api_key, "");
    }

    #[test]
    fn missing_file_yields_error_and_caller_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(Session::load_from(&path).is_err());

        let fallback = Session::load_from(&path).unwrap_or_default();
        assert_eq!(fallback, Session::default());
    }
}
