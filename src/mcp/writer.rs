//! Installation of MCP server entries into an agent.
//!
//! [`McpWriter::write`] installs, in order:
//!
//! 1. the Boost server under `laravel-boost`,
//! 2. every third-party server found by [`McpComposer`],
//! 3. the Herd server under `herd`, when Herd is in use.
//!
//! The first failed install stops the run. Entries already written stay
//! written; there is no rollback.

use crate::agents::SupportsMcp;
use crate::constants::{
    BOOST_MCP_ARTISAN_COMMAND, BOOST_MCP_KEY, HERD_MCP_KEY, HERD_SITE_PATH_ENV, WSL_BRIDGE_COMMAND,
};
use crate::core::{BoostError, McpTarget};
use crate::mcp::composer::McpComposer;
use crate::mcp::environment::{HerdContext, SailContext};
use crate::mcp::models::McpCommand;
use crate::packages::PackageDirectories;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Exit code returned by [`McpWriter::write`] when every entry was installed.
pub const SUCCESS: i32 = 0;

/// Installs the Boost, third-party, and Herd MCP servers into one agent.
pub struct McpWriter<'a, A: ?Sized, P> {
    agent: &'a mut A,
    composer: McpComposer<P>,
    project_root: PathBuf,
    // `None` defers to the process environment.
    wsl: Option<bool>,
}

impl<'a, A, P> McpWriter<'a, A, P>
where
    A: SupportsMcp + ?Sized,
    P: PackageDirectories,
{
    /// Create a writer for `agent`, discovering third-party servers through
    /// `packages`. Unless overridden with [`with_wsl`](Self::with_wsl), WSL
    /// is detected from the process environment when the Boost command is
    /// built.
    pub fn new(agent: &'a mut A, packages: P) -> Self {
        let project_root = agent.project_root().to_path_buf();
        Self {
            agent,
            composer: McpComposer::new(packages),
            project_root,
            wsl: None,
        }
    }

    /// Override WSL detection.
    #[must_use]
    pub fn with_wsl(mut self, wsl: bool) -> Self {
        self.wsl = Some(wsl);
        self
    }

    /// Install all entries.
    ///
    /// Returns [`SUCCESS`] when everything was written.
    ///
    /// # Errors
    ///
    /// [`BoostError::McpInstallFailed`] naming the first entry the agent
    /// could not write; the agent's own error is the cause. No later entry
    /// is attempted.
    pub fn write(
        &mut self,
        sail: Option<&dyn SailContext>,
        herd: Option<&dyn HerdContext>,
    ) -> Result<i32> {
        self.install_boost_mcp(sail)?;
        let installed = self.install_third_party_mcp_servers()?;

        if let Some(herd) = herd {
            self.install_herd_mcp(herd)?;
        }

        info!(
            "Installed {} MCP server(s) into {}",
            installed + 1 + usize::from(herd.is_some()),
            self.agent.name()
        );
        Ok(SUCCESS)
    }

    /// The self entry as it would be installed.
    pub fn build_boost_mcp_command(&self, sail: Option<&dyn SailContext>) -> McpCommand {
        if let Some(sail) = sail {
            return sail.build_mcp_command(BOOST_MCP_KEY);
        }

        if self.wsl.unwrap_or_else(crate::utils::platform::is_running_inside_wsl) {
            return McpCommand::new(
                BOOST_MCP_KEY,
                WSL_BRIDGE_COMMAND,
                vec![
                    self.agent.php_path(true),
                    self.agent.artisan_path(true),
                    BOOST_MCP_ARTISAN_COMMAND.to_string(),
                ],
            );
        }

        McpCommand::new(
            BOOST_MCP_KEY,
            self.agent.php_path(false),
            vec![self.agent.artisan_path(false), BOOST_MCP_ARTISAN_COMMAND.to_string()],
        )
    }

    fn install_boost_mcp(&mut self, sail: Option<&dyn SailContext>) -> Result<()> {
        let mcp = self.build_boost_mcp_command(sail);
        debug!("Installing {} ({} {:?})", mcp.key, mcp.command, mcp.args);

        self.agent.install_mcp(&mcp.key, &mcp.command, &mcp.args, &BTreeMap::new()).context(
            BoostError::McpInstallFailed {
                target: McpTarget::Boost,
            },
        )
    }

    /// Returns how many servers were installed.
    fn install_third_party_mcp_servers(&mut self) -> Result<usize> {
        let servers = self.composer.collect();
        let mut installed = 0;

        for (key, definition) in servers.iter() {
            let Some(command) = definition.installable_command() else {
                debug!("Skipping MCP server '{}': no command", key);
                continue;
            };

            debug!("Installing MCP server '{}'", key);
            self.agent.install_mcp(key, command, &definition.args, &definition.env).with_context(
                || BoostError::McpInstallFailed {
                    target: McpTarget::Server(key.to_string()),
                },
            )?;
            installed += 1;
        }

        Ok(installed)
    }

    fn install_herd_mcp(&mut self, herd: &dyn HerdContext) -> Result<()> {
        let env = BTreeMap::from([(
            HERD_SITE_PATH_ENV.to_string(),
            self.project_root.to_string_lossy().into_owned(),
        )]);
        let php = self.agent.php_path(false);

        self.agent.install_mcp(HERD_MCP_KEY, &php, &[herd.mcp_path()], &env).context(
            BoostError::McpInstallFailed {
                target: McpTarget::Herd,
            },
        )
    }
}
