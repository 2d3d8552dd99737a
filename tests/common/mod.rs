#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Laravel project layout in a temporary directory
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    require: Vec<String>,
    require_dev: Vec<String>,
}

impl TestProject {
    /// Create an empty project with an `artisan` script
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&project_dir)?;
        fs::write(project_dir.join("artisan"), "#!/usr/bin/env php\n")?;

        let project = Self {
            _temp_dir: temp_dir,
            project_dir,
            require: Vec::new(),
            require_dev: Vec::new(),
        };
        project.write_composer_json()?;
        Ok(project)
    }

    /// Get the project directory path
    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Add a required package shipping `resources/boost/mcp/mcp.json`
    pub fn add_mcp_package(&mut self, name: &str, mcp_json: &str) -> Result<()> {
        self.create_file(&format!("vendor/{name}/resources/boost/mcp/mcp.json"), mcp_json)?;
        self.require.push(name.to_string());
        self.write_composer_json()
    }

    /// Add a dev package shipping guidelines only
    pub fn add_guidelines_dev_package(&mut self, name: &str) -> Result<()> {
        self.create_file(&format!("vendor/{name}/resources/boost/guidelines/core.md"), "# Rules\n")?;
        self.require_dev.push(name.to_string());
        self.write_composer_json()
    }

    /// Create a file relative to the project root
    pub fn create_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write {}", file_path.display()))
    }

    fn write_composer_json(&self) -> Result<()> {
        let section = |names: &[String]| {
            names
                .iter()
                .map(|name| (name.clone(), Value::String("*".to_string())))
                .collect::<serde_json::Map<_, _>>()
        };
        let mut composer = serde_json::Map::new();
        composer.insert("name".to_string(), Value::String("test/app".to_string()));
        let mut require = serde_json::Map::new();
        require.insert("php".to_string(), Value::String("^8.2".to_string()));
        require.extend(section(&self.require));
        composer.insert("require".to_string(), Value::Object(require));
        composer.insert("require-dev".to_string(), Value::Object(section(&self.require_dev)));

        fs::write(
            self.project_dir.join("composer.json"),
            serde_json::to_string_pretty(&Value::Object(composer))?,
        )?;
        Ok(())
    }

    /// The binary, run inside the project with a neutral environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("boost-mcp").expect("binary is built");
        cmd.current_dir(&self.project_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("BOOST_MCP_CONFIG")
            .env_remove("WSL_DISTRO_NAME")
            .env_remove("IS_WSL");
        cmd
    }

    /// Read a JSON file relative to the project root
    pub fn read_json(&self, path: &str) -> Value {
        let path = self.project_dir.join(path);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Invalid JSON in {}: {}", path.display(), e))
    }

    /// Keys of a JSON object, in document order
    pub fn json_keys(value: &Value) -> Vec<String> {
        value.as_object().map(|map| map.keys().cloned().collect()).unwrap_or_default()
    }
}
