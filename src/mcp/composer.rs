//! Discovery and normalization of third-party MCP server definitions.
//!
//! Each package may ship `resources/boost/mcp/mcp.json` in one of two forms:
//!
//! ```json
//! { "servers": { "key": {"command": "...", "args": [], "env": {}} } }
//! ```
//!
//! ```json
//! { "servers": [ {"key": "name", "command": "...", "args": [], "env": {}} ] }
//! ```
//!
//! Sources that are missing, unparseable, not a JSON object, or lack a
//! `servers` property are skipped whole. Entries with the wrong shape are
//! skipped individually. Nothing here ever fails: the caller always gets the
//! valid subset that was found.

use crate::constants::MCP_DEFINITION_FILE;
use crate::mcp::models::{McpServers, ServerDefinition};
use crate::packages::PackageDirectories;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Aggregates MCP server definitions from every package that ships one.
pub struct McpComposer<P> {
    packages: P,
}

impl<P: PackageDirectories> McpComposer<P> {
    pub fn new(packages: P) -> Self {
        Self {
            packages,
        }
    }

    /// Read every package's definition file and merge the servers.
    ///
    /// Sources are read fresh on each call. Packages are visited in
    /// enumeration order; a later definition for the same key replaces the
    /// earlier one whole.
    pub fn collect(&self) -> McpServers {
        let mut servers = McpServers::new();

        for (package, directory) in self.packages.mcp_directories() {
            let file = directory.join(MCP_DEFINITION_FILE);
            let Some(package_servers) = read_servers_property(&file) else {
                continue;
            };

            debug!("Reading MCP servers from {} ({})", package, file.display());
            merge_servers(&mut servers, package_servers);
        }

        servers
    }
}

/// Load a definition file and return its `servers` value, or `None` when
/// the source has to be ignored.
fn read_servers_property(file: &Path) -> Option<Value> {
    if !file.is_file() {
        return None;
    }

    let content = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            debug!("Skipping {}: {}", file.display(), e);
            return None;
        }
    };

    let document: Value = match serde_json::from_str(&content) {
        Ok(document) => document,
        Err(e) => {
            debug!("Skipping {}: invalid JSON: {}", file.display(), e);
            return None;
        }
    };

    let Value::Object(mut document) = document else {
        debug!("Skipping {}: top-level value is not an object", file.display());
        return None;
    };

    match document.remove("servers") {
        None | Some(Value::Null) => {
            debug!("Skipping {}: no servers property", file.display());
            None
        }
        Some(servers) => Some(servers),
    }
}

/// The two accepted shapes of the `servers` property.
enum ServersForm {
    /// Object keyed by server name.
    Keyed(Map<String, Value>),
    /// Ordered list of definitions, each carrying its own `key`.
    Listed(Vec<Value>),
}

impl ServersForm {
    /// Decide which form a `servers` value takes.
    ///
    /// An object whose keys are exactly `"0"`, `"1"`, ... in order is a list
    /// written as an object and is treated as [`ServersForm::Listed`], as is an
    /// empty object. Scalars are not servers at all.
    fn detect(servers: Value) -> Option<Self> {
        match servers {
            Value::Array(entries) => Some(Self::Listed(entries)),
            Value::Object(map) if is_sequential(&map) => {
                Some(Self::Listed(map.into_iter().map(|(_, entry)| entry).collect()))
            }
            Value::Object(map) => Some(Self::Keyed(map)),
            _ => None,
        }
    }
}

fn is_sequential(map: &Map<String, Value>) -> bool {
    map.keys().enumerate().all(|(index, key)| *key == index.to_string())
}

fn merge_servers(servers: &mut McpServers, package_servers: Value) {
    match ServersForm::detect(package_servers) {
        Some(ServersForm::Keyed(map)) => {
            for (key, config) in map {
                if is_integer_key(&key) {
                    debug!("Skipping MCP server with numeric key '{}'", key);
                    continue;
                }
                let Value::Object(config) = config else {
                    debug!("Skipping MCP server '{}': definition is not an object", key);
                    continue;
                };
                servers.insert(key, filter_config(&config));
            }
        }
        Some(ServersForm::Listed(entries)) => {
            for entry in entries {
                let Value::Object(mut entry) = entry else {
                    debug!("Skipping MCP server entry: not an object");
                    continue;
                };
                let key = match entry.remove("key") {
                    Some(Value::String(key)) if !key.is_empty() => key,
                    _ => {
                        debug!("Skipping MCP server entry without a usable key");
                        continue;
                    }
                };
                servers.insert(key, filter_config(&entry));
            }
        }
        None => debug!("Skipping servers property: neither an object nor a list"),
    }
}

/// Keys that read as integers are not server names.
///
/// Matches canonical decimal integers only: `"7"` and `"-3"` are integers,
/// `"07"` and `"1.5"` are names.
fn is_integer_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let canonical = (digits == "0" && key == "0")
        || (!digits.is_empty()
            && !digits.starts_with('0')
            && digits.bytes().all(|b| b.is_ascii_digit()));
    canonical && key.parse::<i64>().is_ok()
}

/// Normalize one raw definition.
///
/// Keeps only `command`, `args`, and `env`. `null` and empty-string
/// arguments are removed; number and boolean arguments are kept in their
/// JSON text form. Attributes that end up empty are dropped. The result may
/// lack a command; that is checked at install time.
pub fn filter_config(config: &Map<String, Value>) -> ServerDefinition {
    let command = match config.get("command") {
        Some(Value::String(command)) if !command.is_empty() => Some(command.clone()),
        _ => None,
    };

    let args = match config.get("args") {
        Some(Value::Array(args)) => args.iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    };

    let env = match config.get("env") {
        Some(Value::Object(env)) => env
            .iter()
            .filter_map(|(name, value)| {
                // Empty strings are legitimate environment values.
                let value = match value {
                    Value::String(s) => Some(s.clone()),
                    other => scalar_to_string(other),
                };
                value.map(|value| (name.clone(), value))
            })
            .collect(),
        _ => BTreeMap::new(),
    };

    ServerDefinition {
        command,
        args,
        env,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_filter_config_drops_empty_values() {
        let definition =
            filter_config(&object(json!({"command": "c", "args": [null, "", "a"], "env": {}})));
        assert_eq!(definition, ServerDefinition::new("c", vec!["a".to_string()]));
        assert_eq!(serde_json::to_string(&definition).unwrap(), r#"{"command":"c","args":["a"]}"#);
    }

    #[test]
    fn test_filter_config_discards_unknown_keys() {
        let definition = filter_config(&object(json!({
            "command": "node",
            "type": "stdio",
            "url": "http://localhost",
            "env": {"TOKEN": "x"}
        })));
        assert_eq!(serde_json::to_value(&definition).unwrap(), json!({
            "command": "node",
            "env": {"TOKEN": "x"}
        }));
    }

    #[test]
    fn test_filter_config_without_command() {
        let definition = filter_config(&object(json!({"args": ["x"]})));
        assert!(definition.command.is_none());
        assert_eq!(definition.args, vec!["x"]);

        let definition = filter_config(&object(json!({"command": 42})));
        assert!(definition.command.is_none());
    }

    #[test]
    fn test_filter_config_scalar_args() {
        let definition = filter_config(&object(json!({
            "command": "server",
            "args": ["--port", 8080, true, ["nested"], {"k": "v"}]
        })));
        assert_eq!(definition.args, vec!["--port", "8080", "true"]);
    }

    #[test]
    fn test_detect_forms() {
        assert!(matches!(ServersForm::detect(json!({"a": {}})), Some(ServersForm::Keyed(_))));
        assert!(matches!(ServersForm::detect(json!([])), Some(ServersForm::Listed(_))));
        assert!(matches!(ServersForm::detect(json!({})), Some(ServersForm::Listed(_))));
        assert!(matches!(
            ServersForm::detect(json!({"0": {}, "1": {}})),
            Some(ServersForm::Listed(_))
        ));
        assert!(matches!(ServersForm::detect(json!({"1": {}, "0": {}})), Some(ServersForm::Keyed(_))));
        assert!(ServersForm::detect(json!("servers")).is_none());
        assert!(ServersForm::detect(json!(3)).is_none());
    }

    #[test]
    fn test_integer_keys() {
        assert!(is_integer_key("0"));
        assert!(is_integer_key("7"));
        assert!(is_integer_key("-3"));
        assert!(!is_integer_key("07"));
        assert!(!is_integer_key("-0"));
        assert!(!is_integer_key("1.5"));
        assert!(!is_integer_key("server"));
        assert!(!is_integer_key(""));
        assert!(!is_integer_key("99999999999999999999"));
    }

    #[test]
    fn test_keyed_form_skips_numeric_keys_and_non_objects() {
        let mut servers = McpServers::new();
        merge_servers(
            &mut servers,
            json!({"5": {"command": "a"}, "ok": {"command": "b"}, "bad": "string"}),
        );
        assert_eq!(servers.keys().collect::<Vec<_>>(), vec!["ok"]);
    }

    #[test]
    fn test_listed_form_requires_string_key() {
        let mut servers = McpServers::new();
        merge_servers(
            &mut servers,
            json!([
                {"key": "one", "command": "a"},
                {"command": "no-key"},
                {"key": "", "command": "empty"},
                {"key": 5, "command": "number"},
                "not-an-object",
                {"key": "two", "command": "b"}
            ]),
        );
        assert_eq!(servers.keys().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_listed_form_removes_key_field() {
        let mut servers = McpServers::new();
        merge_servers(&mut servers, json!([{"key": "x", "command": "c"}]));
        assert_eq!(servers.get("x"), Some(&ServerDefinition::new("c", vec![])));
    }

    #[test]
    fn test_later_entry_in_same_source_wins() {
        let mut servers = McpServers::new();
        merge_servers(
            &mut servers,
            json!([{"key": "x", "command": "first", "args": ["a"]}, {"key": "x", "command": "second"}]),
        );
        assert_eq!(servers.get("x"), Some(&ServerDefinition::new("second", vec![])));
    }
}
