//! Install Laravel Boost MCP servers into coding agents.
//!
//! For every selected agent this writes, in order, the Boost server, every
//! MCP server shipped by an installed Composer package, and the Herd server
//! when requested.
//!
//! # Examples
//!
//! Configure the agents listed in `boost-mcp.toml` (Claude Code by default):
//! ```bash
//! boost-mcp install
//! ```
//!
//! Configure Cursor and Codex, starting Boost through Sail:
//! ```bash
//! boost-mcp install --agent cursor --agent codex --sail
//! ```
//!
//! # Error Conditions
//!
//! - An unknown agent name (checked before anything is written)
//! - An agent configuration file that cannot be parsed or written
//!
//! The first failure aborts the command. Agents configured before it keep
//! their new entries.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::warn;

use super::common::{CommandContext, CommandExecutor};
use crate::agents::{SupportsMcp, get_agent};
use crate::mcp::{Herd, HerdContext, McpWriter, Sail, SailContext};

/// Command to install MCP servers into one or more agents.
#[derive(Args, Debug, Default)]
pub struct InstallCommand {
    /// Agent to configure (repeatable)
    ///
    /// Overrides the `agents` list from `boost-mcp.toml`.
    #[arg(short, long = "agent", value_name = "NAME")]
    agents: Vec<String>,

    /// Start the Boost server through Laravel Sail
    #[arg(long)]
    sail: bool,

    /// Also install the Laravel Herd MCP server
    #[arg(long)]
    herd: bool,
}

impl InstallCommand {
    fn selected_agents(&self, context: &CommandContext) -> Vec<String> {
        if self.agents.is_empty() {
            context.config.agents.clone()
        } else {
            self.agents.clone()
        }
    }

    fn sail(&self, context: &CommandContext) -> Option<Sail> {
        if !(self.sail || context.config.sail) {
            return None;
        }
        if !Sail::is_installed(&context.project_root) {
            warn!("Sail requested but {} or a compose file is missing", Sail::BINARY);
        }
        Some(Sail)
    }

    fn herd(&self, context: &CommandContext) -> Result<Option<Herd>> {
        if !(self.herd || context.config.herd) {
            return Ok(None);
        }
        let herd = Herd::new()?;
        if !herd.is_installed() {
            warn!("Herd requested but {} was not found", herd.mcp_entrypoint().display());
            return Ok(None);
        }
        Ok(Some(herd))
    }
}

impl CommandExecutor for InstallCommand {
    fn execute(self, context: &CommandContext) -> Result<()> {
        let mut agents = self
            .selected_agents(context)
            .iter()
            .map(|name| get_agent(name, &context.project_root))
            .collect::<Result<Vec<_>, _>>()?;

        let sail = self.sail(context);
        let herd = self.herd(context)?;

        for agent in &mut agents {
            McpWriter::new(agent, context.packages()).write(
                sail.as_ref().map(|sail| sail as &dyn SailContext),
                herd.as_ref().map(|herd| herd as &dyn HerdContext),
            )?;

            if !context.quiet {
                println!("{} Configured MCP servers for {}", "✓".green(), agent.name());
            }
        }

        Ok(())
    }
}
