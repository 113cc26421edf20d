//! Command-line interface for crumbtrail.
//!
//! The binary works on a directory of page files (see [`FsPageStore`]) and
//! exposes the breadcrumb operations as subcommands:
//!
//! - `render <PAGE>` - resolve and print the page's breadcrumb trail
//! - `suggest <REFERER>` - print the directive a page created from `REFERER` should start with
//! - `extract <PAGE>` - print the page's own breadcrumb declaration
//!
//! # Global options
//!
//! - `--verbose` / `-v` - debug logging on stderr
//! - `--quiet` / `-q` - only errors on stderr
//! - `--config <PATH>` - configuration file to use instead of the default location
//! - `--pages-dir <DIR>` - page directory, overriding `pages.root` from the configuration
//!
//! Without `--verbose` or `--quiet`, the log filter comes from `RUST_LOG` and
//! defaults to `warn`.
//!
//! # Examples
//!
//! ```bash
//! crumbtrail --pages-dir ./pages render "Getting Started"
//! crumbtrail render Guide --format json
//! crumbtrail suggest "https://wiki.example.org/index.php?title=Guide&action=edit"
//! ```

pub mod extract;
pub mod render;
pub mod suggest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::CrumbtrailConfig;
use crate::core::{CrumbError, PageId};
use crate::host::{FsPageStore, PageRevision, PageSource};

/// Runtime settings derived from global flags.
///
/// Kept separate from [`Cli`] so commands can be driven programmatically and
/// in tests without going through argument parsing.
///
/// # Examples
///
/// ```rust
/// use crumbtrail_cli::cli::CliConfig;
///
/// let config = CliConfig::new().with_log_level("debug");
/// assert_eq!(config.log_level.as_deref(), Some("debug"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive; `None` defers to `RUST_LOG`, then `warn`.
    pub log_level: Option<String>,

    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,

    /// Page directory overriding the configured one.
    pub pages_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Use an explicit configuration file.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Use a page directory instead of the configured one.
    #[must_use]
    pub fn with_pages_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.pages_dir = Some(path.into());
        self
    }

    /// Install the stderr log subscriber.
    ///
    /// Does nothing if a global subscriber is already set.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load the configuration file and apply flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub async fn load_settings(&self) -> Result<CrumbtrailConfig> {
        let mut settings = CrumbtrailConfig::load_with_optional(self.config_path.clone()).await?;
        if let Some(dir) = &self.pages_dir {
            settings.pages.root.clone_from(dir);
        }
        Ok(settings)
    }
}

/// Breadcrumb trails for wiki-style page collections.
#[derive(Parser, Debug)]
#[command(name = "crumbtrail", version, about = "Render breadcrumb trails declared inside pages")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the page files
    #[arg(long, global = true)]
    pages_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the breadcrumb trail of a page
    Render(render::RenderCommand),

    /// Suggest a breadcrumb directive for a page created from a referrer URL
    Suggest(suggest::SuggestCommand),

    /// Show the breadcrumb declaration found in a page
    Extract(extract::ExtractCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or the command fails.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            pages_dir: self.pages_dir.clone(),
        }
    }

    /// Execute the command with an explicit [`CliConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or the command fails.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let settings = config.load_settings().await?;

        match self.command {
            Commands::Render(cmd) => cmd.execute(&settings),
            Commands::Suggest(cmd) => cmd.execute(&settings),
            Commands::Extract(cmd) => cmd.execute(&settings),
        }
    }
}

/// Resolve `name` and read the latest revision of an existing page.
pub(crate) fn read_page(pages: &dyn PageSource, name: &str) -> Result<(PageId, PageRevision), CrumbError> {
    let page = pages.resolve(name)?;
    if !pages.exists(&page) {
        return Err(CrumbError::PageNotFound {
            page: page.prefixed_text(),
        });
    }
    let revision = pages.latest_revision(&page).ok_or_else(|| CrumbError::PageNotFound {
        page: page.prefixed_text(),
    })?;
    Ok((page, revision))
}

/// Page store for the configured page directory.
pub(crate) fn open_store(settings: &CrumbtrailConfig) -> FsPageStore {
    let store = FsPageStore::from_config(&settings.pages);
    tracing::debug!("Reading pages from {}", store.root().display());
    store
}
