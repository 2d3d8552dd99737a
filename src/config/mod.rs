//! Project configuration for boost-mcp
//!
//! An optional `boost-mcp.toml` at the project root selects the agents to
//! configure and the environments to account for:
//!
//! ```toml
//! agents = ["claude-code", "cursor"]
//! vendor_dir = "vendor"
//! sail = false
//! herd = false
//! ```
//!
//! Every key is optional. A missing file means defaults. The path can be
//! overridden with `--config` or the `BOOST_MCP_CONFIG` environment variable;
//! `--config` wins.

use crate::constants::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_VENDOR_DIR};
use crate::core::BoostError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings read from `boost-mcp.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Agents configured by `install` when none are given on the command line.
    #[serde(default = "default_agents")]
    pub agents: Vec<String>,

    /// Composer vendor directory, relative to the project root.
    #[serde(default = "default_vendor_dir")]
    pub vendor_dir: String,

    /// Start the Boost server through Laravel Sail.
    #[serde(default)]
    pub sail: bool,

    /// Also install the Laravel Herd server.
    #[serde(default)]
    pub herd: bool,
}

fn default_agents() -> Vec<String> {
    vec!["claude-code".to_string()]
}

fn default_vendor_dir() -> String {
    DEFAULT_VENDOR_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agents: default_agents(),
            vendor_dir: default_vendor_dir(),
            sail: false,
            herd: false,
        }
    }
}

impl Config {
    /// Load configuration for `project_root`.
    ///
    /// `path` takes precedence over `BOOST_MCP_CONFIG`, which takes precedence
    /// over `<project_root>/boost-mcp.toml`. A file that does not exist yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// The file exists but cannot be read, or is not valid configuration.
    pub fn load_with_optional(path: Option<PathBuf>, project_root: &Path) -> Result<Self> {
        let path = path.unwrap_or_else(|| Self::default_path(project_root));
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Where configuration is looked up when no path is given.
    pub fn default_path(project_root: &Path) -> PathBuf {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => project_root.join(CONFIG_FILE_NAME),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// [`BoostError::ConfigError`] when the content is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = crate::utils::fs::read_text_file(path)?;

        let config: Self = toml::from_str(&content).map_err(|e| BoostError::ConfigError {
            message: format!("{}: {}", path.display(), e.message()),
        })?;
        config.validate().with_context(|| format!("Invalid configuration in {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), BoostError> {
        if let Some(unknown) =
            self.agents.iter().find(|name| !crate::agents::SUPPORTED_AGENTS.contains(&name.as_str()))
        {
            return Err(BoostError::UnknownAgent {
                name: unknown.clone(),
            });
        }
        if self.vendor_dir.is_empty() {
            return Err(BoostError::ConfigError {
                message: "vendor_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
