//! Codex keeps MCP servers in `.codex/config.toml`.
//!
//! ```toml
//! [mcp_servers.laravel-boost]
//! command = "/usr/bin/php"
//! args = ["/path/to/project/artisan", "boost:mcp"]
//! ```
//!
//! The file is edited in place with `toml_edit`, so comments and the layout
//! of unrelated tables survive.

use super::SupportsMcp;
use crate::core::BoostError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use toml_edit::{Array, DocumentMut, InlineTable, Item, Table, Value, value};
use tracing::debug;

const CONFIG_FILE: &str = ".codex/config.toml";
const SECTION: &str = "mcp_servers";

#[derive(Debug, Clone)]
pub struct CodexAgent {
    project_root: PathBuf,
}

impl CodexAgent {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(CONFIG_FILE)
    }
}

impl SupportsMcp for CodexAgent {
    fn name(&self) -> &str {
        "codex"
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }

    // Codex starts servers from its own working directory.
    fn uses_absolute_paths(&self) -> bool {
        true
    }

    fn install_mcp(
        &mut self,
        key: &str,
        command: &str,
        args: &[String],
        env: &BTreeMap<String, String>,
    ) -> Result<()> {
        let path = self.config_path();
        let mut document = if path.exists() {
            crate::utils::fs::read_text_file(&path)?
                .parse::<DocumentMut>()
                .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?
        } else {
            DocumentMut::new()
        };

        let section = document.entry(SECTION).or_insert_with(|| {
            let mut table = Table::new();
            table.set_implicit(true);
            Item::Table(table)
        });
        let mut server = Table::new();
        server.insert("command", value(command));
        let mut arguments = Array::new();
        for arg in args {
            arguments.push(arg.as_str());
        }
        server.insert("args", value(arguments));
        if !env.is_empty() {
            let mut variables = InlineTable::new();
            for (name, val) in env {
                variables.insert(name.as_str(), val.as_str().into());
            }
            server.insert("env", value(variables));
        }

        // `mcp_servers = { ... }` is written back inline to keep the user's layout.
        match section {
            Item::Table(servers) => {
                servers.insert(key, Item::Table(server));
            }
            Item::Value(Value::InlineTable(servers)) => {
                servers.insert(key, Value::InlineTable(server.into_inline_table()));
            }
            _ => {
                return Err(BoostError::InvalidAgentConfig {
                    path: path.display().to_string(),
                    reason: format!("'{SECTION}' is not a table"),
                }
                .into());
            }
        }

        crate::utils::fs::write_text_file(&path, &document.to_string())
            .with_context(|| format!("Failed to write {} configuration", self.name()))?;

        debug!("Wrote MCP server '{}' to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn load(path: &Path) -> toml::Table {
        toml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_creates_config() {
        let temp = tempdir().unwrap();
        let mut agent = CodexAgent::new(temp.path().to_path_buf());
        agent
            .install_mcp("laravel-boost", "/usr/bin/php", &["artisan".to_string()], &BTreeMap::new())
            .unwrap();

        let config = load(&agent.config_path());
        let server = &config["mcp_servers"]["laravel-boost"];
        assert_eq!(server["command"].as_str(), Some("/usr/bin/php"));
        assert_eq!(server["args"].as_array().unwrap().len(), 1);
        assert!(server.get("env").is_none());
    }

    #[test]
    fn test_preserves_comments_and_other_tables() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".codex/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "# my settings\nmodel = \"o3\"\n\n[mcp_servers.user]\ncommand = \"mine\"\n")
            .unwrap();

        let mut agent = CodexAgent::new(temp.path().to_path_buf());
        let env = BTreeMap::from([("SITE_PATH".to_string(), "/site".to_string())]);
        agent.install_mcp("herd", "php", &[], &env).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# my settings"));

        let config = load(&path);
        assert_eq!(config["model"].as_str(), Some("o3"));
        assert_eq!(config["mcp_servers"]["user"]["command"].as_str(), Some("mine"));
        assert_eq!(config["mcp_servers"]["herd"]["env"]["SITE_PATH"].as_str(), Some("/site"));
    }

    #[test]
    fn test_invalid_toml_is_failure() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".codex/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "this is = = not toml").unwrap();

        let mut agent = CodexAgent::new(temp.path().to_path_buf());
        assert!(agent.install_mcp("x", "c", &[], &BTreeMap::new()).is_err());
    }

    #[test]
    fn test_section_must_be_table() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".codex/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "mcp_servers = 3\n").unwrap();

        let mut agent = CodexAgent::new(temp.path().to_path_buf());
        let err = agent.install_mcp("x", "c", &[], &BTreeMap::new()).unwrap_err();
        assert!(err.to_string().contains("not a table"));
    }

    #[test]
    fn test_inline_section_keeps_existing_servers() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".codex/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "mcp_servers = { user = { command = \"mine\" } }\n").unwrap();

        let mut agent = CodexAgent::new(temp.path().to_path_buf());
        let env = BTreeMap::from([("SITE_PATH".to_string(), "/site".to_string())]);
        agent.install_mcp("x", "c", &["a".to_string()], &env).unwrap();

        let config = load(&path);
        assert_eq!(config["mcp_servers"]["user"]["command"].as_str(), Some("mine"));
        assert_eq!(config["mcp_servers"]["x"]["command"].as_str(), Some("c"));
        assert_eq!(config["mcp_servers"]["x"]["args"].as_array().unwrap().len(), 1);
        assert_eq!(config["mcp_servers"]["x"]["env"]["SITE_PATH"].as_str(), Some("/site"));

        agent.install_mcp("x", "d", &[], &BTreeMap::new()).unwrap();
        let config = load(&path);
        assert_eq!(config["mcp_servers"]["x"]["command"].as_str(), Some("d"));
        assert!(config["mcp_servers"]["x"].get("env").is_none());
    }
}
