//! Test utilities for crumbtrail
//!
//! Available to the crate's own tests and, through the `test-utils` feature,
//! to the `tests/` suites.
//!
//! # Example
//!
//! ```rust,no_run
//! use crumbtrail_cli::test_utils::PageTreeFixture;
//!
//! let fixture = PageTreeFixture::new().unwrap();
//! fixture.page("Home", "welcome").unwrap();
//! fixture.page("Guide", "<crumb:trail>Home</crumb:trail>").unwrap();
//! let store = fixture.store();
//! ```

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{CrumbtrailConfig, PagesConfig};
use crate::constants::DEFAULT_PAGE_EXTENSION;
use crate::core::PageId;
use crate::host::FsPageStore;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
/// Safe to call from every test.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A page directory in a temporary location, laid out like [`FsPageStore`] expects.
pub struct PageTreeFixture {
    temp_dir: TempDir,
    namespaces: Vec<String>,
}

impl PageTreeFixture {
    /// Create an empty page tree using the default namespaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            namespaces: PagesConfig::default().namespaces,
        })
    }

    /// Directory holding the pages.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `[pages]` settings pointing at this tree.
    #[must_use]
    pub fn pages_config(&self) -> PagesConfig {
        PagesConfig {
            root: self.root().to_path_buf(),
            extension: DEFAULT_PAGE_EXTENSION.to_string(),
            namespaces: self.namespaces.clone(),
        }
    }

    /// Complete default settings with `[pages]` pointing at this tree.
    #[must_use]
    pub fn config(&self) -> CrumbtrailConfig {
        CrumbtrailConfig {
            pages: self.pages_config(),
            ..CrumbtrailConfig::default()
        }
    }

    /// A store reading this tree.
    #[must_use]
    pub fn store(&self) -> FsPageStore {
        FsPageStore::from_config(&self.pages_config())
    }

    /// Write a page, replacing any previous content. Returns the page file path.
    ///
    /// # Errors
    ///
    /// Returns an error if `title` is not a valid page name or the file cannot be written.
    pub fn page(&self, title: &str, text: &str) -> Result<PathBuf> {
        let page = PageId::parse(title, &self.namespaces)?;
        let path = self.store().page_path(&page);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, text)?;
        Ok(path)
    }

    /// Write a TOML configuration file into the tree and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn config_file(&self, contents: &str) -> Result<PathBuf> {
        let path = self.root().join("crumbtrail.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
