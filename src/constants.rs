//! Global constants used throughout the boost-mcp codebase.
//!
//! Server keys, conventional package paths, and environment variable names
//! live here so the composer, writer, and CLI agree on them.

/// Key under which the Boost MCP server itself is installed.
pub const BOOST_MCP_KEY: &str = "laravel-boost";

/// Key under which the Herd MCP server is installed.
pub const HERD_MCP_KEY: &str = "herd";

/// Artisan command that starts the Boost MCP server.
pub const BOOST_MCP_ARTISAN_COMMAND: &str = "boost:mcp";

/// Bridge executable used to launch Linux commands from a Windows agent.
pub const WSL_BRIDGE_COMMAND: &str = "wsl.exe";

/// Environment variables that indicate a WSL runtime.
pub const WSL_ENV_VARS: [&str; 2] = ["WSL_DISTRO_NAME", "IS_WSL"];

/// Environment variable passed to the Herd MCP server with the project root.
pub const HERD_SITE_PATH_ENV: &str = "SITE_PATH";

/// Directory, relative to a package root, holding its MCP definition file.
pub const PACKAGE_MCP_DIR: &str = "resources/boost/mcp";

/// Directory, relative to a package root, holding its guidelines.
pub const PACKAGE_GUIDELINES_DIR: &str = "resources/boost/guidelines";

/// Directory, relative to a package root, holding its skills.
pub const PACKAGE_SKILLS_DIR: &str = "resources/boost/skills";

/// File name of a package's MCP definition file.
pub const MCP_DEFINITION_FILE: &str = "mcp.json";

/// Default project configuration file name.
pub const CONFIG_FILE_NAME: &str = "boost-mcp.toml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV_VAR: &str = "BOOST_MCP_CONFIG";

/// Default Composer vendor directory.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";
