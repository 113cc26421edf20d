//! Directory-backed page store.
//!
//! Pages live as plain files below a root directory:
//!
//! ```text
//! pages/
//! ├── Main_Page.wiki              # main namespace
//! ├── Guide%2FInstall.wiki        # subpage "Guide/Install"
//! └── Help/
//!     └── Getting_started.wiki    # "Help:Getting started"
//! ```
//!
//! File names are the underscored title, percent-encoded so that no title can
//! escape its namespace directory. The revision id of a page is a short SHA-256
//! digest of its content, so it changes exactly when the text changes.

use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ContentProvider, PageExistence, PageResolver, PageRevision};
use crate::config::PagesConfig;
use crate::constants::REVISION_ID_LEN;
use crate::core::{CrumbError, PageId};

/// Page store reading pages from a directory tree.
#[derive(Debug, Clone)]
pub struct FsPageStore {
    root: PathBuf,
    extension: String,
    namespaces: Vec<String>,
}

impl FsPageStore {
    /// Create a store rooted at `root`, reading files with the given extension.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>, namespaces: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            namespaces,
        }
    }

    /// Create a store from the `[pages]` configuration section.
    #[must_use]
    pub fn from_config(config: &PagesConfig) -> Self {
        Self::new(&config.root, &config.extension, config.namespaces.clone())
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the text of `page`.
    #[must_use]
    pub fn page_path(&self, page: &PageId) -> PathBuf {
        let file_name = format!(
            "{}.{}",
            urlencoding::encode(&page.title().replace(' ', "_")),
            self.extension
        );
        if page.namespace().is_empty() {
            self.root.join(file_name)
        } else {
            self.root.join(page.namespace()).join(file_name)
        }
    }
}

impl PageResolver for FsPageStore {
    fn resolve(&self, path: &str) -> Result<PageId, CrumbError> {
        PageId::parse(path, &self.namespaces)
    }
}

impl PageExistence for FsPageStore {
    fn exists(&self, page: &PageId) -> bool {
        self.page_path(page).is_file()
    }
}

impl ContentProvider for FsPageStore {
    fn latest_revision(&self, page: &PageId) -> Option<PageRevision> {
        let path = self.page_path(page);
        match std::fs::read_to_string(&path) {
            Ok(text) => Some(PageRevision {
                revision_id: revision_id(&text),
                text,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Unable to read page '{}' from {}: {}", page, path.display(), e);
                None
            }
        }
    }
}

/// Short content digest used as revision id.
fn revision_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(REVISION_ID_LEN);
    id
}
