//! In-memory page store.
//!
//! Useful for embedding the breadcrumb logic in a host that already keeps page
//! text in memory, and for tests. Every [`MemoryPageStore::insert`] creates a new
//! revision with a monotonically increasing id.

use std::collections::HashMap;

use super::{ContentProvider, PageExistence, PageResolver, PageRevision};
use crate::core::{CrumbError, PageId};

/// A page store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageStore {
    namespaces: Vec<String>,
    pages: HashMap<PageId, PageRevision>,
    next_revision: u64,
}

impl MemoryPageStore {
    /// Create an empty store that knows no namespaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store recognizing the given namespace names.
    #[must_use]
    pub fn with_namespaces<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Store `text` as the new latest revision of `title`.
    ///
    /// # Errors
    ///
    /// Returns [`CrumbError::InvalidReference`] when `title` is not a valid page title.
    pub fn insert(&mut self, title: &str, text: impl Into<String>) -> Result<PageId, CrumbError> {
        let page = self.resolve(title)?;
        self.next_revision += 1;
        self.pages.insert(
            page.clone(),
            PageRevision {
                revision_id: self.next_revision.to_string(),
                text: text.into(),
            },
        );
        Ok(page)
    }

    /// Remove a page, returning its last revision.
    pub fn remove(&mut self, page: &PageId) -> Option<PageRevision> {
        self.pages.remove(page)
    }

    /// Number of stored pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the store holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageResolver for MemoryPageStore {
    fn resolve(&self, path: &str) -> Result<PageId, CrumbError> {
        PageId::parse(path, &self.namespaces)
    }
}

impl PageExistence for MemoryPageStore {
    fn exists(&self, page: &PageId) -> bool {
        self.pages.contains_key(page)
    }
}

impl ContentProvider for MemoryPageStore {
    fn latest_revision(&self, page: &PageId) -> Option<PageRevision> {
        self.pages.get(page).cloned()
    }
}
