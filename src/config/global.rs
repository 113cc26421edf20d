//! The crumbtrail configuration file.
//!
//! Settings are read from `~/.crumbtrail/config.toml` (`%LOCALAPPDATA%\crumbtrail\config.toml`
//! on Windows). The location can be overridden with the `CRUMBTRAIL_CONFIG_PATH`
//! environment variable or the `--config` flag. Every key is optional:
//!
//! ```toml
//! [breadcrumb]
//! delimiter = " &gt; "
//! max_depth = 5
//! overflow_prefix = "[...]"
//! self_link = false
//! printable = false
//! broken_parent_policy = "permissive"   # or "strict"
//! mark_invalid_references = true
//! url_path_separator = "?title="
//!
//! [links]
//! article_path = "/wiki/$1"
//!
//! [pages]
//! root = "pages"
//! extension = "wiki"
//! namespaces = ["Help", "Project", "Category"]
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use crumbtrail_cli::config::CrumbtrailConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CrumbtrailConfig::load().await?;
//! println!("trails are cut after {} entries", config.breadcrumb.max_depth);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::BreadcrumbConfig;
use crate::constants::{CONFIG_PATH_ENV, DEFAULT_ARTICLE_PATH, DEFAULT_PAGE_EXTENSION};
use crate::core::CrumbError;

/// Link generation settings (the `[links]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// URL pattern of an article; `$1` is replaced with the page's URL key.
    pub article_path: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            article_path: DEFAULT_ARTICLE_PATH.to_string(),
        }
    }
}

/// Directory page store settings (the `[pages]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Directory holding the page files.
    pub root: PathBuf,

    /// File extension of page files, without the dot.
    pub extension: String,

    /// Namespace names recognized as `Namespace:Title` prefixes.
    pub namespaces: Vec<String>,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("pages"),
            extension: DEFAULT_PAGE_EXTENSION.to_string(),
            namespaces: vec!["Help".to_string(), "Project".to_string(), "Category".to_string()],
        }
    }
}

/// Complete crumbtrail configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrumbtrailConfig {
    /// Breadcrumb rendering options.
    pub breadcrumb: BreadcrumbConfig,

    /// Link generation options.
    pub links: LinksConfig,

    /// Directory page store options.
    pub pages: PagesConfig,
}

impl CrumbtrailConfig {
    /// Load the configuration from the default location.
    ///
    /// A missing file is not an error; the defaults are returned instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load the configuration from `path` if given, else from the default location.
    ///
    /// An explicitly given path must exist. The default location may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CrumbError::ConfigNotFound`] for a missing explicit path, and an
    /// error if the file cannot be read, parsed or validated.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CrumbError::ConfigNotFound {
                        path: path.display().to_string(),
                    }
                    .into());
                }
                Self::load_from(&path).await
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path).await
                } else {
                    tracing::debug!("No configuration at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(CrumbError::from)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default configuration file location, honoring `CRUMBTRAIL_CONFIG_PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("crumbtrail")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".crumbtrail")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Check values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`CrumbError::ConfigError`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), CrumbError> {
        let invalid = |message: &str| {
            Err(CrumbError::ConfigError {
                message: message.to_string(),
            })
        };

        if self.breadcrumb.url_path_separator.is_empty() {
            return invalid("breadcrumb.url_path_separator must not be empty");
        }
        if !self.links.article_path.contains("$1") {
            return invalid("links.article_path must contain the $1 placeholder");
        }
        if self.pages.extension.is_empty() || self.pages.extension.contains(['/', '\\']) {
            return invalid("pages.extension must be a plain, non-empty file extension");
        }
        Ok(())
    }
}
