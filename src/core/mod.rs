//! Core types shared across boost-mcp.
//!
//! - [`error`] - [`BoostError`], [`ErrorContext`], and [`user_friendly_error`]

pub mod error;

pub use error::{BoostError, ErrorContext, McpTarget, user_friendly_error};
