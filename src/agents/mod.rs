//! Coding agents that can persist MCP server entries.
//!
//! Every agent keeps its MCP servers in its own configuration file and
//! format. [`SupportsMcp`] is the single capability the writer depends on;
//! [`get_agent`] picks the implementation by name before the writer is
//! built.
//!
//! | Agent | File | Section |
//! |---|---|---|
//! | `claude-code` | `.mcp.json` | `mcpServers` |
//! | `cursor` | `.cursor/mcp.json` | `mcpServers` |
//! | `vscode` | `.vscode/mcp.json` | `servers` |
//! | `opencode` | `opencode.json` | `mcp` |
//! | `codex` | `.codex/config.toml` | `[mcp_servers]` |

mod codex;
mod json;

pub use codex::CodexAgent;
pub use json::{EntryStyle, JsonAgent};

use crate::core::BoostError;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Names accepted by [`get_agent`].
pub const SUPPORTED_AGENTS: [&str; 5] = ["claude-code", "cursor", "vscode", "opencode", "codex"];

/// An agent that can persist one MCP server entry at a time.
pub trait SupportsMcp {
    /// Agent identifier (e.g. "claude-code").
    fn name(&self) -> &str;

    /// Project the agent is configured for.
    fn project_root(&self) -> &Path;

    /// Whether the agent launches servers outside the project directory and
    /// therefore needs absolute paths.
    fn uses_absolute_paths(&self) -> bool {
        false
    }

    /// Path of the PHP interpreter as the agent should invoke it.
    ///
    /// `for_wsl` forces an absolute path, since the command is run through
    /// the WSL bridge from outside the project.
    fn php_path(&self, for_wsl: bool) -> String {
        if for_wsl || self.uses_absolute_paths() {
            crate::utils::platform::php_binary()
        } else {
            "php".to_string()
        }
    }

    /// Path of the project's artisan script as the agent should invoke it.
    fn artisan_path(&self, for_wsl: bool) -> String {
        if for_wsl || self.uses_absolute_paths() {
            self.project_root().join("artisan").to_string_lossy().into_owned()
        } else {
            "artisan".to_string()
        }
    }

    /// Persist one server entry, replacing any entry with the same key.
    ///
    /// # Errors
    ///
    /// Any error means the entry was not written.
    fn install_mcp(
        &mut self,
        key: &str,
        command: &str,
        args: &[String],
        env: &BTreeMap<String, String>,
    ) -> Result<()>;
}

/// All supported agents behind one type.
#[derive(Debug, Clone)]
pub enum ConcreteAgent {
    Json(JsonAgent),
    Codex(CodexAgent),
}

impl SupportsMcp for ConcreteAgent {
    fn name(&self) -> &str {
        match self {
            Self::Json(agent) => agent.name(),
            Self::Codex(agent) => agent.name(),
        }
    }

    fn project_root(&self) -> &Path {
        match self {
            Self::Json(agent) => agent.project_root(),
            Self::Codex(agent) => agent.project_root(),
        }
    }

    fn uses_absolute_paths(&self) -> bool {
        match self {
            Self::Json(agent) => agent.uses_absolute_paths(),
            Self::Codex(agent) => agent.uses_absolute_paths(),
        }
    }

    fn install_mcp(
        &mut self,
        key: &str,
        command: &str,
        args: &[String],
        env: &BTreeMap<String, String>,
    ) -> Result<()> {
        match self {
            Self::Json(agent) => agent.install_mcp(key, command, args, env),
            Self::Codex(agent) => agent.install_mcp(key, command, args, env),
        }
    }
}

/// Get the agent for a name.
///
/// # Errors
///
/// [`BoostError::UnknownAgent`] for names not in [`SUPPORTED_AGENTS`].
pub fn get_agent(name: &str, project_root: impl Into<PathBuf>) -> Result<ConcreteAgent, BoostError> {
    let project_root = project_root.into();
    let agent = match name {
        "claude-code" => ConcreteAgent::Json(JsonAgent::claude_code(project_root)),
        "cursor" => ConcreteAgent::Json(JsonAgent::cursor(project_root)),
        "vscode" => ConcreteAgent::Json(JsonAgent::vscode(project_root)),
        "opencode" => ConcreteAgent::Json(JsonAgent::opencode(project_root)),
        "codex" => ConcreteAgent::Codex(CodexAgent::new(project_root)),
        _ => {
            return Err(BoostError::UnknownAgent {
                name: name.to_string(),
            });
        }
    };
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_agent_known_names() {
        for name in SUPPORTED_AGENTS {
            let agent = get_agent(name, "/project").unwrap();
            assert_eq!(agent.name(), name);
            assert_eq!(agent.project_root(), Path::new("/project"));
        }
    }

    #[test]
    fn test_get_agent_unknown() {
        let err = get_agent("notepad", "/project").unwrap_err();
        assert_eq!(err.to_string(), "Unknown agent 'notepad'");
    }

    #[test]
    fn test_relative_paths_by_default() {
        let agent = get_agent("claude-code", "/project").unwrap();
        assert_eq!(agent.php_path(false), "php");
        assert_eq!(agent.artisan_path(false), "artisan");
    }

    #[test]
    fn test_absolute_paths_for_wsl() {
        let agent = get_agent("claude-code", "/project").unwrap();
        assert_eq!(agent.artisan_path(true), Path::new("/project").join("artisan").to_string_lossy());
        assert!(!agent.php_path(true).is_empty());
    }

    #[test]
    fn test_codex_uses_absolute_paths() {
        let agent = get_agent("codex", "/project").unwrap();
        assert!(agent.uses_absolute_paths());
        assert_eq!(agent.artisan_path(false), Path::new("/project").join("artisan").to_string_lossy());
    }
}
