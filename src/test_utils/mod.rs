//! Test utilities for boost-mcp
//!
//! Helpers shared by unit tests and the integration tests in `tests/`:
//! - [`init_test_logging`] to see tracing output while debugging a test
//! - [`RecordingAgent`], an in-memory [`SupportsMcp`] sink that records every
//!   install call and can be told to fail
//! - [`StaticPackages`], a fixed [`PackageDirectories`] list
//!
//! # Example
//!
//! ```rust,no_run
//! use boost_mcp::mcp::McpWriter;
//! use boost_mcp::test_utils::{RecordingAgent, StaticPackages};
//!
//! let mut agent = RecordingAgent::new("/project");
//! let mut writer = McpWriter::new(&mut agent, StaticPackages::default()).with_wsl(false);
//! writer.write(None, None).unwrap();
//! assert_eq!(agent.keys(), vec!["laravel-boost"]);
//! ```

use crate::agents::SupportsMcp;
use crate::packages::PackageDirectories;
use anyhow::{Result, bail};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`. Does nothing when neither
/// is set. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// One recorded `install_mcp` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCall {
    pub key: String,
    pub command: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

/// Interpreter path reported for absolute-path agents and WSL.
pub const RECORDING_PHP_PATH: &str = "/usr/bin/php";

/// An agent that keeps installs in memory.
///
/// Every call is recorded, including the one that fails. Paths are
/// deterministic: `php` and `artisan` when relative, [`RECORDING_PHP_PATH`]
/// and `<root>/artisan` when absolute.
#[derive(Debug, Clone)]
pub struct RecordingAgent {
    project_root: PathBuf,
    absolute_paths: bool,
    fail_on: Option<usize>,
    calls: Vec<InstallCall>,
}

impl RecordingAgent {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            absolute_paths: false,
            fail_on: None,
            calls: Vec::new(),
        }
    }

    /// Fail the `n`th install call, counting from 1.
    #[must_use]
    pub fn fail_on_call(mut self, n: usize) -> Self {
        self.fail_on = Some(n);
        self
    }

    #[must_use]
    pub fn with_absolute_paths(mut self) -> Self {
        self.absolute_paths = true;
        self
    }

    pub fn calls(&self) -> &[InstallCall] {
        &self.calls
    }

    /// Keys in call order.
    pub fn keys(&self) -> Vec<&str> {
        self.calls.iter().map(|call| call.key.as_str()).collect()
    }

    pub fn call(&self, key: &str) -> Option<&InstallCall> {
        self.calls.iter().find(|call| call.key == key)
    }
}

impl SupportsMcp for RecordingAgent {
    fn name(&self) -> &str {
        "recording"
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn uses_absolute_paths(&self) -> bool {
        self.absolute_paths
    }

    fn php_path(&self, for_wsl: bool) -> String {
        if for_wsl || self.absolute_paths {
            RECORDING_PHP_PATH.to_string()
        } else {
            "php".to_string()
        }
    }

    fn install_mcp(
        &mut self,
        key: &str,
        command: &str,
        args: &[String],
        env: &BTreeMap<String, String>,
    ) -> Result<()> {
        self.calls.push(InstallCall {
            key: key.to_string(),
            command: command.to_string(),
            args: args.to_vec(),
            env: env.clone(),
        });

        if self.fail_on == Some(self.calls.len()) {
            bail!("refusing to write '{key}'");
        }
        Ok(())
    }
}

/// A fixed list of `(package, directory)` pairs.
#[derive(Debug, Clone, Default)]
pub struct StaticPackages(pub Vec<(String, PathBuf)>);

impl StaticPackages {
    pub fn new<I, S, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<PathBuf>,
    {
        Self(entries.into_iter().map(|(name, dir)| (name.into(), dir.into())).collect())
    }
}

impl PackageDirectories for StaticPackages {
    fn mcp_directories(&self) -> Vec<(String, PathBuf)> {
        self.0.clone()
    }
}

/// Write `content` as `mcp.json` inside `directory`, creating it.
pub fn write_mcp_definition(directory: &Path, content: &str) {
    std::fs::create_dir_all(directory).unwrap_or_else(|e| {
        panic!("Failed to create {}: {e}", directory.display());
    });
    std::fs::write(directory.join(crate::constants::MCP_DEFINITION_FILE), content)
        .unwrap_or_else(|e| panic!("Failed to write definition: {e}"));
}
