//! Command-line interface for boost-mcp.
//!
//! # Available Commands
//!
//! - `install` - Write the Boost, package, and Herd MCP servers into agents
//! - `list` - Show the package MCP servers `install` would write
//! - `packages` - Show which installed packages ship Boost resources
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Only log errors and suppress progress lines
//! - `--config <PATH>` - Use a configuration file other than `boost-mcp.toml`
//! - `--project <DIR>` - Run against a project other than the current directory
//!
//! ```bash
//! boost-mcp install --agent cursor
//! boost-mcp --project ../shop list --format json
//! RUST_LOG=boost_mcp=trace boost-mcp install
//! ```
//!
//! `RUST_LOG`, when set, takes precedence over `--verbose` and `--quiet`.
//! Logs go to stderr; command output goes to stdout.

mod common;
mod install;
mod list;
mod packages;

pub use common::{CommandContext, CommandExecutor};
pub use install::InstallCommand;
pub use list::{ListCommand, OutputFormat};
pub use packages::PackagesCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can build one without parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
    /// Explicit project directory
    pub project: Option<PathBuf>,
    /// Suppress progress lines
    pub quiet: bool,
}

impl CliConfig {
    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Configure Laravel Boost MCP servers for coding agents.
#[derive(Parser, Debug)]
#[command(
    name = "boost-mcp",
    about = "Configure Laravel Boost MCP servers for coding agents",
    version,
    long_about = "Writes the Laravel Boost MCP server, the MCP servers shipped by installed \
                  Composer packages, and optionally Laravel Herd's server into the \
                  configuration files of coding agents."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors and suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file [default: <project>/boost-mcp.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Project directory [default: current directory]
    #[arg(long, global = true, value_name = "DIR")]
    project: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install MCP servers into coding agents
    Install(InstallCommand),

    /// List MCP servers shipped by installed packages
    List(ListCommand),

    /// List installed packages that ship Boost resources
    Packages(PackagesCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Any failure of the command; the binary renders it with
    /// [`user_friendly_error`](crate::core::user_friendly_error).
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config)
    }

    /// Build a [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
            project: self.project.clone(),
            quiet: self.quiet,
        }
    }

    /// Execute with explicit settings and without touching global logging.
    ///
    /// # Errors
    ///
    /// Any failure of the command.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let context = CommandContext::load(config.project, config.config_path, config.quiet)?;

        match self.command {
            Commands::Install(cmd) => cmd.execute(&context),
            Commands::List(cmd) => cmd.execute(&context),
            Commands::Packages(cmd) => cmd.execute(&context),
        }
    }
}
