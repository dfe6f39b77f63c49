//! # Client Configuration
//!
//! Runtime configuration for the directory API client and its sessions.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SEWER_API_BASE_URL=https://api.example.com                          │
//! │     SEWER_RETRY_MAX=2                                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/sewer-directory/client.toml (Linux)                      │
//! │     ~/Library/Application Support/com.sewerdirectory.sewer-directory/  │
//! │       client.toml (macOS)                                              │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3000, 2 retries every 500 ms                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # client.toml
//! [api]
//! base_url = "https://api.sewerrepair.pro"
//! header_name = "Slr"
//! header_value = "XYZWAYW1AA"
//! timeout_ms = 10000
//!
//! [retry]
//! max_retries = 2
//! delay_ms = 500
//!
//! [search]
//! states_debounce_ms = 400
//! states_min_chars = 1
//! location_debounce_ms = 300
//! location_min_chars = 2
//! location_limit = 10
//!
//! [listing]
//! page = 1
//! per_page = 20
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use sewer_core::validation::{validate_page, validate_per_page};
use sewer_core::{CLIENT_HEADER_NAME, CLIENT_HEADER_VALUE, DEFAULT_API_BASE_URL, DEFAULT_PAGE, DEFAULT_PER_PAGE};

use crate::error::{ClientError, ClientResult};

// =============================================================================
// Sections
// =============================================================================

/// Backend location and request decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API base URL. Unset or blank falls back to `http://localhost:3000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Identifying header attached to every authenticated request.
    #[serde(default = "default_header_name")]
    pub header_name: String,

    #[serde(default = "default_header_value")]
    pub header_value: String,

    /// Per-attempt request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_header_name() -> String {
    CLIENT_HEADER_NAME.to_string()
}

fn default_header_value() -> String {
    CLIENT_HEADER_VALUE.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            header_name: default_header_name(),
            header_value: default_header_value(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Retry policy for failed GETs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Additional attempts after the first one.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed pause between attempts.
    #[serde(default = "default_retry_delay_ms")]
    pub delay_ms: u64,
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay_ms: default_retry_delay_ms(),
        }
    }
}

impl RetrySettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Debounce and threshold settings for the search sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_states_debounce_ms")]
    pub states_debounce_ms: u64,

    #[serde(default = "default_states_min_chars")]
    pub states_min_chars: usize,

    #[serde(default = "default_location_debounce_ms")]
    pub location_debounce_ms: u64,

    #[serde(default = "default_location_min_chars")]
    pub location_min_chars: usize,

    /// Maximum suggestions requested from the autocomplete endpoint.
    #[serde(default = "default_location_limit")]
    pub location_limit: u32,
}

fn default_states_debounce_ms() -> u64 {
    400
}

fn default_states_min_chars() -> usize {
    1
}

fn default_location_debounce_ms() -> u64 {
    300
}

fn default_location_min_chars() -> usize {
    2
}

fn default_location_limit() -> u32 {
    10
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            states_debounce_ms: default_states_debounce_ms(),
            states_min_chars: default_states_min_chars(),
            location_debounce_ms: default_location_debounce_ms(),
            location_min_chars: default_location_min_chars(),
            location_limit: default_location_limit(),
        }
    }
}

/// Initial page for listing sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSettings {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

// =============================================================================
// Client Config
// =============================================================================

/// Complete client configuration.
///
/// Read-only once a client has been built from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub retry: RetrySettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub listing: ListingSettings,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (client.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Client config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let base = url::Url::parse(self.api_base_url())?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api_base_url()
            )));
        }

        if self.api.header_name.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "api.header_name must not be empty".into(),
            ));
        }

        if self.api.timeout_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "api.timeout_ms must be greater than 0".into(),
            ));
        }

        validate_page(self.listing.page)?;
        validate_per_page(self.listing.per_page)?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("SEWER_API_BASE_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api.base_url = Some(url);
        }

        if let Some(value) = lookup("SEWER_CLIENT_HEADER_VALUE") {
            self.api.header_value = value;
        }

        if let Some(max) = lookup("SEWER_RETRY_MAX") {
            match max.parse::<u32>() {
                Ok(n) => self.retry.max_retries = n,
                Err(_) => warn!(value = %max, "Ignoring non-numeric SEWER_RETRY_MAX"),
            }
        }

        if let Some(delay) = lookup("SEWER_RETRY_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => self.retry.delay_ms = ms,
                Err(_) => warn!(value = %delay, "Ignoring non-numeric SEWER_RETRY_DELAY_MS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sewerdirectory", "sewer-directory")
            .map(|dirs| dirs.config_dir().join("client.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Effective API base URL with the local fallback applied.
    pub fn api_base_url(&self) -> &str {
        self.api
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms)
    }
}
