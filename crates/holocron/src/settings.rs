//! Persisted application settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use holocron_auth::AuthConfig;
use holocron_core::{CatalogConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable overriding [`Settings::base_url`].
pub const BASE_URL_ENV: &str = "HOLOCRON_BASE_URL";

/// Settings read from `settings.json`. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the upstream API.
    pub base_url: String,
    /// Per-request HTTP timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Simulated login delay, in milliseconds.
    pub login_latency_ms: u64,
    /// Period of the token refresh check, in seconds.
    pub refresh_interval_secs: u64,
    /// User-Agent header sent upstream; empty keeps the built-in one.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            login_latency_ms: 500,
            refresh_interval_secs: 60,
            user_agent: String::new(),
        }
    }
}

impl Settings {
    /// Loads settings from the user config directory, then applies the
    /// environment override.
    ///
    /// An unreadable or malformed file is logged and replaced by defaults.
    pub async fn load() -> Self {
        Self::load_or_default(&settings_path())
            .await
            .with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Loads settings from `path`, falling back to defaults on any failure.
    pub async fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path).await {
            Ok(settings) => settings,
            Err(e) => {
                info!("Failed to load settings, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parses settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `contents` is not a settings object.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Replaces the base URL when `base_url` is set and non-empty.
    #[must_use]
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            debug!("Base URL overridden by {BASE_URL_ENV}");
            self.base_url = base_url;
        }
        self
    }

    /// Catalog client configuration.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        let config = CatalogConfig::default()
            .with_base_url(self.base_url.clone())
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs));
        if self.user_agent.trim().is_empty() {
            config
        } else {
            config.with_user_agent(self.user_agent.trim())
        }
    }

    /// Authentication timing.
    #[must_use]
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::default()
            .with_login_latency(Duration::from_millis(self.login_latency_ms))
            .with_refresh_interval(Duration::from_secs(self.refresh_interval_secs.max(1)))
    }
}

/// Application directory under the platform config root.
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("holocron")
}

/// Location of `settings.json`.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Location of the persisted session.
#[must_use]
pub fn session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("holocron")
        .join("session.json")
}
