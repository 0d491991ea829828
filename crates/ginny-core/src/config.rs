//! Configuration
//!
//! ## Resolution
//!
//! Config is loaded with a three-layer resolution:
//! 1. An explicit path (`ginny --config <path>`), which must exist
//! 2. The override in the data dir (~/.local/share/ginny/config/ginny.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from a file fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/ginny.toml");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GinnyConfig {
    pub server: ServerSettings,
    pub advisor: AdvisorThresholds,
}

/// Where the web and MCP servers listen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// MCP server port; no MCP server when unset
    pub mcp_port: Option<u16>,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            mcp_port: None,
            allowed_origins: vec![],
        }
    }
}

/// Monthly amounts (and percentages) at which the assistant's canned
/// commentary and advice kick in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorThresholds {
    pub dining_out_commentary: f64,
    pub shopping_commentary: f64,
    pub subscriptions_commentary: f64,
    pub dining_out_threshold: f64,
    pub dining_out_cap: f64,
    pub subscriptions_threshold: f64,
    pub subscriptions_cap: f64,
    /// Savings rate (percent of income) below which the roast flags it
    pub low_savings_rate: f64,
    /// Share of income on one want above which the roast flags it
    pub category_share_warning: f64,
}

impl Default for AdvisorThresholds {
    fn default() -> Self {
        Self {
            dining_out_commentary: 150.0,
            shopping_commentary: 200.0,
            subscriptions_commentary: 50.0,
            dining_out_threshold: 100.0,
            dining_out_cap: 80.0,
            subscriptions_threshold: 30.0,
            subscriptions_cap: 20.0,
            low_savings_rate: 10.0,
            category_share_warning: 10.0,
        }
    }
}

impl GinnyConfig {
    /// Load configuration (explicit path, then override, then default)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::InvalidData(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "Loading config");
            return Self::from_toml(&fs::read_to_string(path)?);
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                debug!(path = %path.display(), "Loading config override");
                return Self::from_toml(&fs::read_to_string(&path)?);
            }
        }

        Self::embedded()
    }

    /// The defaults compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidData(format!("Failed to serialize config: {}", e)))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("ginny").join("config").join("ginny.toml"))
}
