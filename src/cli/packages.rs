//! Show which installed Composer packages ship Boost resources.
//!
//! ```bash
//! $ boost-mcp packages
//! acme/search (guidelines, mcp)
//! acme/ui (skills)
//! ```

use anyhow::Result;
use clap::Args;

use super::common::{CommandContext, CommandExecutor};
use crate::packages::ThirdPartyPackage;

/// Command to list packages with guidelines, skills, or MCP servers.
#[derive(Args, Debug, Default)]
pub struct PackagesCommand {}

impl CommandExecutor for PackagesCommand {
    fn execute(self, context: &CommandContext) -> Result<()> {
        let packages = ThirdPartyPackage::discover(&context.packages());

        if packages.is_empty() {
            if !context.quiet {
                println!("No installed packages ship Boost resources.");
            }
            return Ok(());
        }

        for package in packages {
            println!("{}", package.display_label());
        }
        Ok(())
    }
}
