//
//  sentry-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module loads and saves the CLI configuration and resolves it into the
//! [`ClientConfig`] the API client is constructed from.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/sentry/config.toml`
//! - **macOS**: `~/Library/Application Support/sentry/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\sentry\config\config.toml`
//!
//! The `--config` flag (or `SENTRY_CONFIG`) points at a different file.
//!
//! ## Example Configuration File
//!
//! ```toml
//! auth_token = "sntrys_..."
//! endpoint = "https://sentry.example.com/api/0/"
//! timeout = 30
//! default_organization = "acme"
//! ```
//!
//! ## Resolution Order
//!
//! For each setting: command-line flag or environment variable, then the
//! config file, then the client default.
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{ClientConfig, Error};

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`].
pub const VALID_KEYS: &[&str] = &["auth_token", "endpoint", "timeout", "default_organization"];

/// Persistent CLI configuration.
///
/// Every field is optional; missing keys in the file deserialize to `None`.
///
/// # Examples
///
/// ```rust
/// use sentry_client::config::Config;
///
/// let config: Config = toml::from_str("endpoint = \"http://localhost:9000/api/0/\"").unwrap();
/// assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000/api/0/"));
/// assert!(config.auth_token.is_none());
/// ```
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Bearer token for the Sentry API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// API root, e.g. `https://sentry.example.com/api/0/` for self-hosted Sentry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Organization slug used when a command does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_organization: Option<String>,
}

/// Settings supplied on the command line or through the environment.
///
/// These take precedence over the config file.
#[derive(Clone, Default)]
pub struct Overrides {
    pub auth_token: Option<String>,
    pub endpoint: Option<String>,
    pub timeout: Option<u64>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or the default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "sentry")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the value of `key` as a string, if set.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "auth_token" => self.auth_token.clone(),
            "endpoint" => self.endpoint.clone(),
            "timeout" => self.timeout.map(|t| t.to_string()),
            "default_organization" => self.default_organization.clone(),
            _ => None,
        }
    }

    /// Sets `key` to `value`, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "auth_token" => self.auth_token = Some(value.to_string()),
            "endpoint" => {
                if value.is_empty() {
                    bail!("endpoint can not be an empty string");
                }
                self.endpoint = Some(value.to_string());
            }
            "timeout" => {
                let seconds = value
                    .parse::<u64>()
                    .with_context(|| format!("Invalid timeout '{}', expected whole seconds", value))?;
                self.timeout = Some(seconds);
            }
            "default_organization" => self.default_organization = Some(value.to_string()),
            _ => bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Clears `key`.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "auth_token" => self.auth_token = None,
            "endpoint" => self.endpoint = None,
            "timeout" => self.timeout = None,
            "default_organization" => self.default_organization = None,
            _ => bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Merges `overrides` over this configuration into client construction parameters.
    ///
    /// Fails with [`Error::Configuration`] when no token is available anywhere.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use sentry_client::config::{Config, Overrides};
    ///
    /// let config = Config {
    ///     auth_token: Some("from-file".to_string()),
    ///     timeout: Some(30),
    ///     ..Default::default()
    /// };
    /// let overrides = Overrides {
    ///     auth_token: Some("from-flag".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let client_config = config.client_config(&overrides).unwrap();
    /// assert_eq!(client_config.auth_token, "from-flag");
    /// assert_eq!(client_config.timeout, Some(Duration::from_secs(30)));
    /// assert_eq!(client_config.endpoint, None);
    /// ```
    pub fn client_config(&self, overrides: &Overrides) -> Result<ClientConfig> {
        let auth_token = overrides
            .auth_token
            .clone()
            .or_else(|| self.auth_token.clone())
            .ok_or_else(|| {
                Error::Configuration(
                    "no auth token. Pass --token, set SENTRY_AUTH_TOKEN, \
                     or run 'sentry config set auth_token <token>'"
                        .to_string(),
                )
            })?;

        Ok(ClientConfig {
            auth_token,
            endpoint: overrides.endpoint.clone().or_else(|| self.endpoint.clone()),
            timeout: overrides
                .timeout
                .or(self.timeout)
                .map(Duration::from_secs),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("default_organization", &self.default_organization)
            .finish()
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("auth_token", "abc").unwrap();
        config.set("timeout", "15").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.auth_token.as_deref(), Some("abc"));
        assert_eq!(loaded.timeout, Some(15));
        assert_eq!(loaded.endpoint, None);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout = \"soon\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::default();
        assert!(config.set("timeout", "ten").is_err());
        assert!(config.set("endpoint", "").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.unset("colour").is_err());

        config.set("default_organization", "acme").unwrap();
        assert_eq!(config.get("default_organization").as_deref(), Some("acme"));
        config.unset("default_organization").unwrap();
        assert_eq!(config.get("default_organization"), None);
    }

    #[test]
    fn test_client_config_requires_token() {
        let err = Config::default()
            .client_config(&Overrides::default())
            .unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_client_config_prefers_overrides() {
        let config = Config {
            auth_token: Some("file".to_string()),
            endpoint: Some("https://file.example.com/api/0/".to_string()),
            timeout: Some(30),
            default_organization: None,
        };
        let overrides = Overrides {
            auth_token: None,
            endpoint: Some("https://flag.example.com/api/0/".to_string()),
            timeout: Some(5),
        };
        let client_config = config.client_config(&overrides).unwrap();
        assert_eq!(client_config.auth_token, "file");
        assert_eq!(
            client_config.endpoint.as_deref(),
            Some("https://flag.example.com/api/0/")
        );
        assert_eq!(client_config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config {
            auth_token: Some("super-secret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
