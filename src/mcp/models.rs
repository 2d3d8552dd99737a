//! Canonical MCP server types shared by the composer, the writer, and the agents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A normalized MCP server definition.
///
/// Only `command`, `args`, and `env` survive normalization. Empty values are
/// never stored: an empty `args` list or `env` map is treated as absent and
/// skipped when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDefinition {
    /// Executable that starts the server. May be missing after normalization;
    /// such entries are skipped at install time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Arguments passed to the command, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Environment variables set when the server runs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl ServerDefinition {
    /// Build a definition from a command and its arguments.
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: Some(command.into()),
            args,
            env: BTreeMap::new(),
        }
    }

    /// Attach environment variables.
    #[must_use]
    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// The command, if it is present and non-empty.
    pub fn installable_command(&self) -> Option<&str> {
        self.command.as_deref().filter(|command| !command.is_empty())
    }
}

/// Insertion-ordered map of server key to definition.
///
/// Inserting an existing key replaces the whole definition but keeps the
/// key at its original position, so iteration order is the order in which
/// keys were first seen.
///
/// Backed by a `Vec` with linear lookup. A project ships a handful of
/// servers, and the order must survive without pulling in an indexed map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McpServers {
    entries: Vec<(String, ServerDefinition)>,
}

impl McpServers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the definition stored under `key`.
    ///
    /// Returns the previous definition when one was replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        definition: ServerDefinition,
    ) -> Option<ServerDefinition> {
        let key = key.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, definition));
        }
        self.entries.push((key, definition));
        None
    }

    pub fn get(&self, key: &str) -> Option<&ServerDefinition> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, definition)| definition)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServerDefinition)> {
        self.entries.iter().map(|(key, definition)| (key.as_str(), definition))
    }
}

impl Serialize for McpServers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, definition) in &self.entries {
            map.serialize_entry(key, definition)?;
        }
        map.end()
    }
}

/// A launch descriptor for a server installed under a fixed key.
///
/// Used for the self entry, whose construction depends on the runtime
/// environment (direct, WSL, or Sail).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpCommand {
    pub key: String,
    pub command: String,
    pub args: Vec<String>,
}

impl McpCommand {
    pub fn new(key: impl Into<String>, command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            key: key.into(),
            command: command.into(),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut servers = McpServers::new();
        servers.insert("a", ServerDefinition::new("one", vec![]));
        servers.insert("b", ServerDefinition::new("two", vec![]));
        let previous = servers.insert("a", ServerDefinition::new("three", vec![]));

        assert_eq!(previous.and_then(|d| d.command), Some("one".to_string()));
        assert_eq!(servers.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(servers.get("a").unwrap().command.as_deref(), Some("three"));
        assert_eq!(servers.len(), 2);
        assert!(servers.contains_key("b"));
        assert!(!servers.contains_key("c"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let definition = ServerDefinition::new("npx", vec![]);
        let json = serde_json::to_string(&definition).unwrap();
        assert_eq!(json, r#"{"command":"npx"}"#);
    }

    #[test]
    fn test_installable_command() {
        assert_eq!(ServerDefinition::new("php", vec![]).installable_command(), Some("php"));
        assert_eq!(ServerDefinition::new("", vec![]).installable_command(), None);
        assert_eq!(ServerDefinition::default().installable_command(), None);
    }
}
