//! boost-mcp CLI entry point
//!
//! Parses arguments, runs the command, and renders failures as a coloured
//! error with suggestions. Any failure exits with status 1.

use boost_mcp::cli;
use boost_mcp::core::error::user_friendly_error;
use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
