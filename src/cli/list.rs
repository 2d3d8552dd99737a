//! List the third-party MCP servers that `install` would write.
//!
//! Servers are shown in install order after merging every package's
//! definition, so a key defined by two packages appears once with the later
//! definition.
//!
//! # Examples
//!
//! ```bash
//! boost-mcp list
//! boost-mcp list --format json
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;

use super::common::{CommandContext, CommandExecutor};
use crate::mcp::{McpComposer, McpServers, ServerDefinition};

/// Output format for `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per server
    #[default]
    Text,
    /// Pretty-printed JSON object keyed by server
    Json,
}

/// Command to list discovered MCP servers.
#[derive(Args, Debug, Default)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl CommandExecutor for ListCommand {
    fn execute(self, context: &CommandContext) -> Result<()> {
        let servers = McpComposer::new(context.packages()).collect();

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&servers)?),
            OutputFormat::Text => print!("{}", render_text(&servers)),
        }
        Ok(())
    }
}

fn render_text(servers: &McpServers) -> String {
    if servers.is_empty() {
        return "No MCP servers found in installed packages.\n".to_string();
    }

    let mut output = String::new();
    for (key, definition) in servers.iter() {
        output.push_str(&format!("{}: {}\n", key.bold(), describe(definition)));
    }
    output
}

fn describe(definition: &ServerDefinition) -> String {
    let Some(command) = definition.installable_command() else {
        return "(no command, skipped)".yellow().to_string();
    };

    let mut line = std::iter::once(command)
        .chain(definition.args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    if !definition.env.is_empty() {
        let names = definition.env.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
        line.push_str(&format!(" [env: {names}]"));
    }
    line
}
