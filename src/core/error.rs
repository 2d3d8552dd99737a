//! Error handling for boost-mcp
//!
//! Two kinds of failure exist:
//!
//! - Malformed package definitions are never errors. The composer skips
//!   them and logs the reason at debug level.
//! - A sink that cannot persist an entry is fatal. The writer stops at the
//!   first such failure and reports which entry it was.
//!
//! [`BoostError`] enumerates the failures callers may want to match on.
//! [`ErrorContext`] and [`user_friendly_error`] turn any error into the
//! coloured message the CLI prints.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Which install step failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McpTarget {
    /// The Boost server itself.
    Boost,
    /// A third-party server, by key.
    Server(String),
    /// The Herd server.
    Herd,
}

impl fmt::Display for McpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boost => write!(f, "Boost MCP"),
            Self::Server(key) => write!(f, "MCP server '{key}'"),
            Self::Herd => write!(f, "Herd MCP"),
        }
    }
}

/// The main error type for boost-mcp operations
#[derive(Error, Debug)]
pub enum BoostError {
    /// An agent could not persist an MCP entry.
    ///
    /// The sink's own error is attached as the cause when this is raised
    /// through [`anyhow::Context`].
    #[error("Failed to install {target}: could not write configuration")]
    McpInstallFailed {
        /// The entry being installed
        target: McpTarget,
    },

    /// No agent with this name is supported.
    #[error("Unknown agent '{name}'")]
    UnknownAgent {
        /// The requested agent name
        name: String,
    },

    /// An agent configuration file exists but has an unexpected shape.
    #[error("Invalid agent configuration in {path}: {reason}")]
    InvalidAgentConfig {
        /// Path of the agent configuration file
        path: String,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// The project directory does not exist.
    #[error("Project directory not found: {path}")]
    ProjectNotFound {
        /// The directory that was given
        path: String,
    },
}

/// Error context wrapper that provides user-friendly error information
///
/// Shown by the CLI as a red error line, an optional yellow details line,
/// and an optional green suggestion line.
#[derive(Debug)]
pub struct ErrorContext {
    /// The error message to show
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// Known [`BoostError`] variants get tailored suggestions; the causes in the
/// error chain become the details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    let details = (!causes.is_empty()).then(|| causes.join("\n  caused by: "));

    let mut context = if let Some(boost_error) = error.downcast_ref::<BoostError>() {
        create_error_context(boost_error)
    } else if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => ErrorContext::new(error.to_string())
                .with_suggestion("Check file ownership and permissions of the agent configuration files"),
            std::io::ErrorKind::NotFound => ErrorContext::new(error.to_string())
                .with_suggestion("Check that the file or directory exists and the path is correct"),
            _ => ErrorContext::new(error.to_string()),
        }
    } else {
        ErrorContext::new(error.to_string())
    };

    if context.details.is_none() {
        context.details = details;
    }
    context
}

fn create_error_context(error: &BoostError) -> ErrorContext {
    let context = ErrorContext::new(error.to_string());
    match error {
        BoostError::McpInstallFailed {
            ..
        } => context.with_suggestion(
            "Check that the agent configuration file is valid and writable, then run the install again",
        ),
        BoostError::UnknownAgent {
            ..
        } => context.with_suggestion(format!(
            "Supported agents: {}",
            crate::agents::SUPPORTED_AGENTS.join(", ")
        )),
        BoostError::InvalidAgentConfig {
            ..
        } => context.with_suggestion("Fix or remove the file so it can be rewritten"),
        BoostError::ConfigError {
            ..
        } => context.with_suggestion(format!(
            "Check the syntax of {}",
            crate::constants::CONFIG_FILE_NAME
        )),
        BoostError::ProjectNotFound {
            ..
        } => context.with_suggestion("Pass an existing directory with --project"),
    }
}
