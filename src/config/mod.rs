//
//  bitbucket-kit
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Two kinds of configuration live here:
//!
//! - [`Configuration`]: the immutable value every endpoint carries. It holds the
//!   access token and the API root and is cloned into each request, so requests
//!   in flight share no mutable state.
//! - [`Settings`]: the CLI's persisted preferences, stored as TOML in a
//!   platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/bbkit/config.toml`
//! - **macOS**: `~/Library/Application Support/bbkit/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\bbkit\config.toml`
//!
//! Setting `BBKIT_CONFIG_DIR` replaces the directory on every platform.
//!
//! ## Example Configuration File
//!
//! ```toml
//! api_endpoint = "https://bitbucket.org/api/2.0"
//! user = "myusername"
//! ```
//!
//! Access tokens are never written to this file; see [`crate::auth::KeyringStore`].
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::BITBUCKET_BASE_URL;

/// Environment variable that overrides the settings directory.
pub const CONFIG_DIR_ENV: &str = "BBKIT_CONFIG_DIR";

/// Keys understood by [`Settings::get`] and [`Settings::set`].
pub const SETTINGS_KEYS: &[&str] = &["api_endpoint", "user"];

/// Immutable request configuration: access token and API root.
///
/// An empty token means anonymous access; no `Authorization` header is sent.
///
/// # Example
///
/// ```rust
/// use bitbucket_kit::Configuration;
///
/// let config = Configuration::new("token");
/// assert_eq!(config.api_endpoint(), "https://bitbucket.org/api/2.0");
/// assert_eq!(config.authorization_header().as_deref(), Some("Bearer token"));
///
/// let local = config.with_api_endpoint("http://localhost:8080/2.0");
/// assert_eq!(local.api_endpoint(), "http://localhost:8080/2.0");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    access_token: String,
    api_endpoint: String,
}

impl Configuration {
    /// Creates a configuration for the public Bitbucket Cloud API.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_endpoint: BITBUCKET_BASE_URL.to_string(),
        }
    }

    /// Returns a copy pointing at a different API root.
    pub fn with_api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    /// The access token; empty when anonymous.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The API root requests are resolved against.
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Returns `true` when no access token is configured.
    pub fn is_anonymous(&self) -> bool {
        self.access_token.is_empty()
    }

    /// The `Authorization` header value, if a token is configured.
    pub fn authorization_header(&self) -> Option<String> {
        if self.is_anonymous() {
            None
        } else {
            Some(format!("Bearer {}", self.access_token))
        }
    }
}

impl Default for Configuration {
    /// Anonymous access to the public Bitbucket Cloud API.
    fn default() -> Self {
        Self::new("")
    }
}

// Tokens end up in logs through `{:?}` far too easily.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.is_anonymous() { "" } else { "<redacted>" };
        f.debug_struct("Configuration")
            .field("access_token", &token)
            .field("api_endpoint", &self.api_endpoint)
            .finish()
    }
}

/// Persisted CLI settings.
///
/// # Fields
///
/// * `api_endpoint` - API root override; defaults to [`BITBUCKET_BASE_URL`]
/// * `user` - Username of the last successful `bbkit auth login`
///
/// # Examples
///
/// ```rust
/// use bitbucket_kit::config::Settings;
///
/// let mut settings = Settings::default();
/// assert_eq!(settings.api_endpoint(), "https://bitbucket.org/api/2.0");
///
/// assert!(settings.set("user", "bob".to_string()));
/// assert_eq!(settings.get("user").as_deref(), Some("bob"));
/// assert!(!settings.set("colour", "blue".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// API root override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    /// Username remembered after login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Settings {
    /// Loads settings from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be determined, or the file exists but cannot
    /// be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads settings from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }

    /// Saves settings to the default location, creating directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves settings to `path`, overwriting it.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
            .with_context(|| format!("Failed to write settings file {}", path.display()))
    }

    /// Returns the path of the settings file.
    ///
    /// Honours [`CONFIG_DIR_ENV`]; otherwise uses the `directories` crate.
    /// The file may not exist yet.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir).join("config.toml"));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The API root to use, falling back to Bitbucket Cloud.
    pub fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(BITBUCKET_BASE_URL)
    }

    /// Builds a request [`Configuration`] from these settings and a token.
    pub fn configuration(&self, access_token: impl Into<String>) -> Configuration {
        Configuration::new(access_token).with_api_endpoint(self.api_endpoint())
    }

    /// Reads a setting by key. Unknown or unset keys yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_endpoint" => self.api_endpoint.clone(),
            "user" => self.user.clone(),
            _ => None,
        }
    }

    /// Sets a setting by key. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "api_endpoint" => {
                self.api_endpoint = Some(value);
                true
            }
            "user" => {
                self.user = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Clears a setting by key. Returns `false` for unknown keys.
    pub fn unset(&mut self, key: &str) -> bool {
        match key {
            "api_endpoint" => {
                self.api_endpoint = None;
                true
            }
            "user" => {
                self.user = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_defaults() {
        let config = Configuration::default();
        assert!(config.is_anonymous());
        assert_eq!(config.api_endpoint(), BITBUCKET_BASE_URL);
        assert_eq!(config.authorization_header(), None);
    }

    #[test]
    fn test_configuration_debug_redacts_token() {
        let debug = format!("{:?}", Configuration::new("super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let settings = Settings {
            api_endpoint: Some("http://localhost:7990/2.0".to_string()),
            user: Some("bob".to_string()),
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(
            loaded.configuration("t").api_endpoint(),
            "http://localhost:7990/2.0"
        );
    }

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_invalid_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_endpoint = [").unwrap();

        let error = Settings::load_from(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn test_settings_unset() {
        let mut settings = Settings::default();
        settings.set("api_endpoint", "http://x".to_string());
        assert!(settings.unset("api_endpoint"));
        assert_eq!(settings.api_endpoint(), BITBUCKET_BASE_URL);
        assert!(!settings.unset("nope"));
    }
}
