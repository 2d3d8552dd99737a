//! Agents whose MCP configuration lives in a JSON document.

use super::SupportsMcp;
use crate::core::BoostError;
use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a single server entry is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    /// `{"command": ..., "args": [...], "env": {...}}`
    Standard,
    /// `{"type": "local", "enabled": true, "command": [command, ...args], "environment": {...}}`
    OpenCode,
}

/// An agent storing servers under one section of a JSON file.
///
/// Other keys in the file, and other servers in the section, are left
/// untouched.
#[derive(Debug, Clone)]
pub struct JsonAgent {
    name: &'static str,
    project_root: PathBuf,
    config_file: &'static str,
    section: &'static str,
    style: EntryStyle,
    absolute_paths: bool,
}

impl JsonAgent {
    pub fn claude_code(project_root: PathBuf) -> Self {
        Self {
            name: "claude-code",
            project_root,
            config_file: ".mcp.json",
            section: "mcpServers",
            style: EntryStyle::Standard,
            absolute_paths: false,
        }
    }

    pub fn cursor(project_root: PathBuf) -> Self {
        Self {
            name: "cursor",
            project_root,
            config_file: ".cursor/mcp.json",
            section: "mcpServers",
            style: EntryStyle::Standard,
            absolute_paths: false,
        }
    }

    pub fn vscode(project_root: PathBuf) -> Self {
        Self {
            name: "vscode",
            project_root,
            config_file: ".vscode/mcp.json",
            section: "servers",
            style: EntryStyle::Standard,
            absolute_paths: false,
        }
    }

    pub fn opencode(project_root: PathBuf) -> Self {
        Self {
            name: "opencode",
            project_root,
            config_file: "opencode.json",
            section: "mcp",
            style: EntryStyle::OpenCode,
            absolute_paths: true,
        }
    }

    /// Full path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(self.config_file)
    }

    pub fn section(&self) -> &str {
        self.section
    }

    fn load_document(&self, path: &Path) -> Result<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }

        let document: Value = crate::utils::read_json_file(path)?;
        match document {
            Value::Object(map) => Ok(map),
            _ => Err(BoostError::InvalidAgentConfig {
                path: path.display().to_string(),
                reason: "top-level value is not an object".to_string(),
            }
            .into()),
        }
    }

    fn build_entry(&self, command: &str, args: &[String], env: &BTreeMap<String, String>) -> Value {
        match self.style {
            EntryStyle::Standard => {
                let mut entry = Map::new();
                entry.insert("command".to_string(), json!(command));
                if !args.is_empty() {
                    entry.insert("args".to_string(), json!(args));
                }
                if !env.is_empty() {
                    entry.insert("env".to_string(), json!(env));
                }
                Value::Object(entry)
            }
            EntryStyle::OpenCode => {
                let command_line: Vec<&str> =
                    std::iter::once(command).chain(args.iter().map(String::as_str)).collect();
                let mut entry = Map::new();
                entry.insert("type".to_string(), json!("local"));
                entry.insert("enabled".to_string(), json!(true));
                entry.insert("command".to_string(), json!(command_line));
                if !env.is_empty() {
                    entry.insert("environment".to_string(), json!(env));
                }
                Value::Object(entry)
            }
        }
    }
}

impl SupportsMcp for JsonAgent {
    fn name(&self) -> &str {
        self.name
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn uses_absolute_paths(&self) -> bool {
        self.absolute_paths
    }

    fn install_mcp(
        &mut self,
        key: &str,
        command: &str,
        args: &[String],
        env: &BTreeMap<String, String>,
    ) -> Result<()> {
        let path = self.config_path();
        let mut document = self.load_document(&path)?;

        let section = document.entry(self.section).or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(servers) = section else {
            return Err(BoostError::InvalidAgentConfig {
                path: path.display().to_string(),
                reason: format!("'{}' is not an object", self.section),
            }
            .into());
        };

        servers.insert(key.to_string(), self.build_entry(command, args, env));

        crate::utils::write_json_file(&path, &Value::Object(document), true)
            .with_context(|| format!("Failed to write {} configuration", self.name))?;

        debug!("Wrote MCP server '{}' to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_claude_code_creates_file() {
        let temp = tempdir().unwrap();
        let mut agent = JsonAgent::claude_code(temp.path().to_path_buf());

        agent
            .install_mcp("laravel-boost", "php", &["artisan".to_string(), "boost:mcp".to_string()], &BTreeMap::new())
            .unwrap();

        assert_eq!(
            read(&temp.path().join(".mcp.json")),
            json!({"mcpServers": {"laravel-boost": {"command": "php", "args": ["artisan", "boost:mcp"]}}})
        );
    }

    #[test]
    fn test_preserves_existing_content() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".mcp.json");
        fs::write(
            &path,
            r#"{"mcpServers": {"user": {"command": "mine"}}, "other": {"keep": true}}"#,
        )
        .unwrap();

        let mut agent = JsonAgent::claude_code(temp.path().to_path_buf());
        let env = BTreeMap::from([("TOKEN".to_string(), "abc".to_string())]);
        agent.install_mcp("github", "npx", &[], &env).unwrap();

        let document = read(&path);
        assert_eq!(document["mcpServers"]["user"], json!({"command": "mine"}));
        assert_eq!(document["mcpServers"]["github"], json!({"command": "npx", "env": {"TOKEN": "abc"}}));
        assert_eq!(document["other"], json!({"keep": true}));
    }

    #[test]
    fn test_replaces_same_key() {
        let temp = tempdir().unwrap();
        let mut agent = JsonAgent::cursor(temp.path().to_path_buf());

        agent.install_mcp("x", "first", &[], &BTreeMap::new()).unwrap();
        agent.install_mcp("x", "second", &[], &BTreeMap::new()).unwrap();

        let document = read(&temp.path().join(".cursor/mcp.json"));
        assert_eq!(document["mcpServers"]["x"], json!({"command": "second"}));
    }

    #[test]
    fn test_vscode_section() {
        let temp = tempdir().unwrap();
        let mut agent = JsonAgent::vscode(temp.path().to_path_buf());
        agent.install_mcp("x", "c", &[], &BTreeMap::new()).unwrap();

        let document = read(&temp.path().join(".vscode/mcp.json"));
        assert_eq!(document["servers"]["x"], json!({"command": "c"}));
    }

    #[test]
    fn test_opencode_entry_shape() {
        let temp = tempdir().unwrap();
        let mut agent = JsonAgent::opencode(temp.path().to_path_buf());
        let env = BTreeMap::from([("SITE_PATH".to_string(), "/site".to_string())]);
        agent.install_mcp("herd", "php", &["herd-mcp.phar".to_string()], &env).unwrap();

        let document = read(&temp.path().join("opencode.json"));
        assert_eq!(
            document["mcp"]["herd"],
            json!({
                "type": "local",
                "enabled": true,
                "command": ["php", "herd-mcp.phar"],
                "environment": {"SITE_PATH": "/site"}
            })
        );
    }

    #[test]
    fn test_invalid_json_is_failure_and_untouched() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".mcp.json");
        fs::write(&path, "{ broken").unwrap();

        let mut agent = JsonAgent::claude_code(temp.path().to_path_buf());
        assert!(agent.install_mcp("x", "c", &[], &BTreeMap::new()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[test]
    fn test_non_object_section_is_failure() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".mcp.json"), r#"{"mcpServers": []}"#).unwrap();

        let mut agent = JsonAgent::claude_code(temp.path().to_path_buf());
        let err = agent.install_mcp("x", "c", &[], &BTreeMap::new()).unwrap_err();
        assert!(err.to_string().contains("'mcpServers' is not an object"));
    }

    #[test]
    fn test_non_object_document_is_failure() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".mcp.json"), "[]").unwrap();

        let mut agent = JsonAgent::claude_code(temp.path().to_path_buf());
        assert!(agent.install_mcp("x", "c", &[], &BTreeMap::new()).is_err());
    }
}
