//! Common utilities and traits for CLI commands

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::BoostError;
use crate::packages::ComposerPackages;

/// Everything a command needs to know about the project it runs against.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Absolute project directory
    pub project_root: PathBuf,
    /// Loaded `boost-mcp.toml`, or defaults
    pub config: Config,
    /// Suppress progress lines on stdout
    pub quiet: bool,
}

impl CommandContext {
    /// Resolve the project directory and load its configuration.
    ///
    /// `project` defaults to the current directory.
    ///
    /// # Errors
    ///
    /// [`BoostError::ProjectNotFound`] when the directory does not exist, or
    /// any configuration loading error.
    pub fn load(project: Option<PathBuf>, config_path: Option<PathBuf>, quiet: bool) -> Result<Self> {
        let project_root = resolve_project_root(project)?;
        let config = Config::load_with_optional(config_path, &project_root)?;
        Ok(Self {
            project_root,
            config,
            quiet,
        })
    }

    /// Package enumeration for this project, honouring `vendor_dir`.
    pub fn packages(&self) -> ComposerPackages {
        ComposerPackages::with_vendor_dir(&self.project_root, &self.config.vendor_dir)
    }
}

fn resolve_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let path = match project {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if !path.is_dir() {
        return Err(BoostError::ProjectNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    Ok(absolute(&path))
}

fn absolute(path: &Path) -> PathBuf {
    canonical_path(path).unwrap_or_else(|| path.to_path_buf())
}

// `canonicalize` adds a `\\?\` prefix on Windows that php does not understand.
#[cfg(windows)]
fn canonical_path(path: &Path) -> Option<PathBuf> {
    std::path::absolute(path).ok()
}

#[cfg(not(windows))]
fn canonical_path(path: &Path) -> Option<PathBuf> {
    path.canonicalize().ok()
}

/// Common trait for CLI command execution
pub trait CommandExecutor: Sized {
    /// Run the command against a loaded project.
    fn execute(self, context: &CommandContext) -> Result<()>;
}
