//! TOML configuration for the CLI and server.
//!
//! Secrets never live in the file: the store token, auth secret, and model
//! API key are taken from `GDPTREND_STORE_TOKEN`, `GDPTREND_AUTH_SECRET`,
//! and `ANTHROPIC_API_KEY` at startup.

use gdptrend_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration, one section per collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GdptrendConfig {
    /// API server settings
    pub server: ServerSection,
    /// Document store settings
    pub store: StoreSection,
    /// Completion model settings
    pub model: ModelSection,
    /// Auth settings
    pub auth: AuthSection,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Bind address for `gdptrend serve`
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Backend kind: `"memory"` or `"http"`
    pub backend: String,
    /// Base URL of the document store (http backend)
    pub base_url: String,
    /// Collection name holding GDP records
    pub collection: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            base_url: String::new(),
            collection: "gdp_records".to_string(),
        }
    }
}

/// `[model]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    /// Model name passed to the completion provider
    pub model: String,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
        }
    }
}

/// `[auth]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthSection {
    /// Require a bearer token on record and analysis routes
    pub enabled: bool,
}

impl GdptrendConfig {
    /// Resolves the config file path: explicit flag, else the platform
    /// config dir (`…/gdptrend/config.toml`).
    pub fn resolve_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(p) => Some(PathBuf::from(p)),
            None => dirs::config_dir().map(|d| d.join("gdptrend").join("config.toml")),
        }
    }

    /// Loads configuration from the resolved path.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// an error, never silently ignored.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_path(explicit) else {
            return Err(Error::config(
                "could not determine config directory for this platform",
            ));
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Writes this config as TOML, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("failed to render config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
