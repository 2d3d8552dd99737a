//! Cross-platform utilities.
//!
//! - [`fs`] - Atomic writes and JSON file helpers
//! - [`platform`] - Platform checks, home directory, PHP and WSL detection

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, ensure_dir, read_json_file, safe_write, write_json_file};
pub use platform::{get_home_dir, is_macos, is_running_inside_wsl, is_windows};
