//! Platform detection and host path resolution.

use crate::constants::WSL_ENV_VARS;
use anyhow::Result;
use std::path::PathBuf;

/// Checks if the current platform is Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Checks if the current platform is macOS.
#[must_use]
pub const fn is_macos() -> bool {
    cfg!(target_os = "macos")
}

/// Gets the home directory path for the current user.
///
/// # Errors
///
/// Fails when the home directory cannot be determined, with a hint about the
/// environment variable involved on this platform.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        let platform_help = if is_windows() {
            "On Windows: Check that the USERPROFILE environment variable is set"
        } else {
            "On Unix/Linux: Check that the HOME environment variable is set"
        };
        anyhow::anyhow!("Could not determine home directory.\n\n{platform_help}")
    })
}

/// Absolute path of the PHP interpreter, or `php` when it is not on `PATH`.
pub fn php_binary() -> String {
    which::which("php")
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "php".to_string())
}

/// Whether the process runs inside Windows Subsystem for Linux.
///
/// Reads the process environment; see [`is_wsl_with`].
pub fn is_running_inside_wsl() -> bool {
    is_wsl_with(|name| std::env::var(name).ok())
}

/// WSL detection against an arbitrary variable lookup.
///
/// Either `WSL_DISTRO_NAME` or `IS_WSL` set to something other than an empty
/// string or `"0"` marks a WSL runtime.
pub fn is_wsl_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    WSL_ENV_VARS
        .iter()
        .any(|name| lookup(name).is_some_and(|value| !value.is_empty() && value != "0"))
}
