//! MCP (Model Context Protocol) server installation for Laravel projects.
//!
//! This module turns a project's environment into agent MCP entries:
//! - [`McpComposer`] gathers third-party server definitions shipped by
//!   installed packages and normalizes them
//! - [`McpWriter`] installs the Boost server, those third-party servers, and
//!   optionally the Herd server into one agent, stopping at the first failure
//! - [`Sail`] and [`Herd`] describe the optional runtime environments that
//!   change which commands are written
//!
//! Agents themselves live in [`crate::agents`]; the writer only depends on the
//! [`SupportsMcp`](crate::agents::SupportsMcp) capability.

pub mod composer;
pub mod environment;
pub mod models;
pub mod writer;

pub use composer::{McpComposer, filter_config};
pub use environment::{Herd, HerdContext, Sail, SailContext};
pub use models::{McpCommand, McpServers, ServerDefinition};
pub use writer::{McpWriter, SUCCESS};
