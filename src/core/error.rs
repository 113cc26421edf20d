//! Error handling for crumbtrail
//!
//! Two kinds of failure share one enum:
//!
//! - **Walk conditions** ([`CrumbError::InvalidReference`], [`CrumbError::MissingAncestor`],
//!   [`CrumbError::NoDeclaration`], [`CrumbError::CycleDetected`]) end a breadcrumb walk
//!   early. They are never returned as `Err` from the resolver; they are reported in
//!   [`crate::resolver::Termination::Halted`] and the caller just sees a shorter trail.
//! - **Host failures** (configuration, I/O, missing start page) surface through
//!   `anyhow::Result` in the CLI and are shown to the user via [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use crumbtrail_cli::core::{CrumbError, ErrorContext};
//!
//! let context = ErrorContext::new(CrumbError::PageNotFound {
//!     page: "Main Page".to_string(),
//! })
//! .with_suggestion("Check the --pages-dir option");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for crumbtrail operations.
#[derive(Error, Debug)]
pub enum CrumbError {
    /// A parent path could not be turned into a page identifier.
    #[error("Invalid page reference '{path}': {reason}")]
    InvalidReference {
        /// The raw path as written in the directive
        path: String,
        /// Why the path was rejected
        reason: String,
    },

    /// A declared ancestor does not exist or has no readable content.
    #[error("Ancestor page '{page}' does not exist or has no content")]
    MissingAncestor {
        /// Prefixed title of the missing page
        page: String,
    },

    /// An ancestor page carries no parent directive, so the chain cannot continue.
    #[error("Page '{page}' declares no parent")]
    NoDeclaration {
        /// Prefixed title of the page without a directive
        page: String,
    },

    /// A declared parent was already part of the trail.
    #[error("Page '{page}' is already part of the trail")]
    CycleDetected {
        /// Prefixed title of the repeated page
        page: String,
    },

    /// A page requested by the user does not exist in the store.
    #[error("Page '{page}' not found")]
    PageNotFound {
        /// The page as requested
        page: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// An explicitly requested configuration file is missing.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl CrumbError {
    /// Whether this error is one of the conditions that merely end a breadcrumb walk.
    #[must_use]
    pub const fn is_walk_condition(&self) -> bool {
        matches!(
            self,
            Self::InvalidReference { .. }
                | Self::MissingAncestor { .. }
                | Self::NoDeclaration { .. }
                | Self::CycleDetected { .. }
        )
    }
}

impl Clone for CrumbError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidReference {
                path,
                reason,
            } => Self::InvalidReference {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::MissingAncestor {
                page,
            } => Self::MissingAncestor {
                page: page.clone(),
            },
            Self::NoDeclaration {
                page,
            } => Self::NoDeclaration {
                page: page.clone(),
            },
            Self::CycleDetected {
                page,
            } => Self::CycleDetected {
                page: page.clone(),
            },
            Self::PageNotFound {
                page,
            } => Self::PageNotFound {
                page: page.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::ConfigNotFound {
                path,
            } => Self::ConfigNotFound {
                path: path.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// When displayed, errors show the main message in red, optional details in
/// yellow and an optional suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CrumbError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: CrumbError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

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
        write!(f, "{}", self.error)?;

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

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// Recognizes [`CrumbError`] anywhere in the error chain, [`std::io::Error`] and
/// [`toml::de::Error`]; everything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(crumb_error) = cause.downcast_ref::<CrumbError>() {
            return create_error_context(crumb_error.clone());
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(CrumbError::Other {
                    message: format!("Permission denied: {error:#}"),
                })
                .with_suggestion("Check the permissions of the pages directory and the config file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(CrumbError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(CrumbError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your crumbtrail configuration file");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(CrumbError::Other {
        message,
    })
}

fn create_error_context(error: CrumbError) -> ErrorContext {
    match &error {
        CrumbError::PageNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the page title and the --pages-dir option")
            .with_details("Page titles are matched after normalization: underscores become spaces and the first letter is capitalized"),
        CrumbError::ConfigNotFound {
            ..
        } => ErrorContext::new(error).with_suggestion(format!(
            "Create the file, or unset {} and drop --config to use the defaults",
            crate::constants::CONFIG_PATH_ENV
        )),
        CrumbError::ConfigError {
            ..
        }
        | CrumbError::TomlError(_) => ErrorContext::new(error)
            .with_suggestion("Check the [breadcrumb], [links] and [pages] sections of your configuration"),
        CrumbError::InvalidReference {
            ..
        } => ErrorContext::new(error)
            .with_details("Titles must not be empty or contain any of # < > [ ] | { } or percent-escapes"),
        _ => ErrorContext::new(error),
    }
}
