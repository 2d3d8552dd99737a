//! boost-mcp - Laravel Boost MCP installer
//!
//! Writes Model Context Protocol server entries for a Laravel project into
//! the configuration files of coding agents (Claude Code, Cursor, VS Code,
//! OpenCode, Codex).
//!
//! Three kinds of entries are installed, always in this order:
//!
//! 1. `laravel-boost`, the project's own Boost server, started through
//!    `php artisan boost:mcp`, through Sail, or through `wsl.exe` on WSL
//! 2. every server shipped by an installed Composer package in
//!    `resources/boost/mcp/mcp.json`
//! 3. `herd`, Laravel Herd's server, when requested and installed
//!
//! # Core Modules
//!
//! - [`mcp`] - Discovery and normalization of package servers, and the writer
//! - [`agents`] - The [`agents::SupportsMcp`] capability and one implementation per agent
//! - [`packages`] - Composer package enumeration
//! - [`config`] - Optional `boost-mcp.toml`
//! - [`core`] - Error types and user-facing error rendering
//! - [`cli`] - Command-line interface
//! - [`utils`] - Atomic file writes and platform helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use boost_mcp::agents::get_agent;
//! use boost_mcp::mcp::McpWriter;
//! use boost_mcp::packages::ComposerPackages;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut agent = get_agent("claude-code", "/srv/app")?;
//! McpWriter::new(&mut agent, ComposerPackages::new("/srv/app")).write(None, None)?;
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

// MCP installation
pub mod agents;
pub mod mcp;
pub mod packages;

// Supporting modules
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
