//! File system helpers.
//!
//! Agent configuration files are user data: every write goes through
//! [`atomic_write`] so a crash never leaves a half-written file behind.

pub mod atomic;
pub mod dirs;
pub mod formats;

pub use atomic::{atomic_write, safe_write};
pub use dirs::ensure_dir;
pub use formats::{read_json_file, read_text_file, write_json_file, write_text_file};
