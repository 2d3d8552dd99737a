//! Optional runtime environments that change how MCP entries are built.
//!
//! - [`SailContext`]: the project runs inside Laravel Sail containers, so the
//!   Boost server has to be started through the Sail wrapper script.
//! - [`HerdContext`]: Laravel Herd is installed and ships its own MCP server.
//!
//! Both are passed to [`McpWriter::write`](super::McpWriter::write) as
//! `Option`s and only consulted when present.

use crate::constants::BOOST_MCP_ARTISAN_COMMAND;
use crate::mcp::models::McpCommand;
use crate::utils::platform::{get_home_dir, is_macos, is_windows};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Builds the self entry when the project runs under a container wrapper.
pub trait SailContext {
    fn build_mcp_command(&self, key: &str) -> McpCommand;
}

/// Locates the Herd MCP server entrypoint.
pub trait HerdContext {
    fn mcp_path(&self) -> String;
}

/// Laravel Sail.
#[derive(Debug, Clone, Default)]
pub struct Sail;

impl Sail {
    /// Wrapper script, relative to the project root.
    pub const BINARY: &'static str = "vendor/bin/sail";

    /// Sail is usable when its wrapper script and a compose file are present.
    pub fn is_installed(project_root: &Path) -> bool {
        project_root.join(Self::BINARY).is_file()
            && ["docker-compose.yml", "compose.yaml", "compose.yml", "docker-compose.yaml"]
                .iter()
                .any(|name| project_root.join(name).is_file())
    }
}

impl SailContext for Sail {
    fn build_mcp_command(&self, key: &str) -> McpCommand {
        McpCommand::new(
            key,
            Self::BINARY,
            vec!["artisan".to_string(), BOOST_MCP_ARTISAN_COMMAND.to_string()],
        )
    }
}

/// Laravel Herd.
#[derive(Debug, Clone)]
pub struct Herd {
    home: PathBuf,
}

impl Herd {
    /// Resolve Herd relative to the current user's home directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_home(get_home_dir()?))
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
        }
    }

    /// Directory holding Herd's bundled binaries.
    pub fn bin_path(&self) -> PathBuf {
        if is_macos() {
            self.home.join("Library").join("Application Support").join("Herd").join("bin")
        } else {
            self.home.join(".config").join("herd").join("bin")
        }
    }

    pub fn mcp_entrypoint(&self) -> PathBuf {
        self.bin_path().join("herd-mcp.phar")
    }

    /// Herd only exists on macOS and Windows, and only counts as installed
    /// when its MCP entrypoint is present.
    pub fn is_installed(&self) -> bool {
        (is_macos() || is_windows()) && self.mcp_entrypoint().is_file()
    }
}

impl HerdContext for Herd {
    fn mcp_path(&self) -> String {
        self.mcp_entrypoint().to_string_lossy().into_owned()
    }
}
