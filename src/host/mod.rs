//! Collaborator interfaces consumed by the resolver and the preload seeder.
//!
//! The breadcrumb logic never touches storage or produces link markup itself.
//! It talks to the host through the narrow traits defined here:
//!
//! | Trait | Responsibility |
//! |---|---|
//! | [`PageResolver`] | turn a raw path into a [`PageId`] |
//! | [`PageExistence`] | tell whether a page exists |
//! | [`ContentProvider`] | hand out the latest raw text of a page |
//! | [`LinkRenderer`] | produce embeddable link and text fragments |
//! | [`DependencyRecorder`] | collect cache dependencies of a render |
//!
//! [`PageSource`] bundles the three page-facing traits. Two reference stores ship
//! with the crate: [`MemoryPageStore`] and the directory-backed [`FsPageStore`].

pub mod memory;
pub mod store;

pub use memory::MemoryPageStore;
pub use store::FsPageStore;

use serde::Serialize;

use crate::core::{CrumbError, PageId};

/// Raw text of a page at a specific revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRevision {
    /// Opaque identity of the revision, changes whenever the text changes.
    pub revision_id: String,
    /// Unprocessed text of the page.
    pub text: String,
}

/// Resolves raw page references.
pub trait PageResolver {
    /// Resolve `path` to a page identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CrumbError::InvalidReference`] when `path` is not a syntactically
    /// valid page reference. The page does not need to exist.
    fn resolve(&self, path: &str) -> Result<PageId, CrumbError>;
}

/// Read-only existence check.
pub trait PageExistence {
    /// Whether `page` currently exists.
    fn exists(&self, page: &PageId) -> bool;
}

/// Access to the current content of pages.
pub trait ContentProvider {
    /// Latest revision of `page`, or `None` when it has no readable content.
    fn latest_revision(&self, page: &PageId) -> Option<PageRevision>;
}

/// Everything the breadcrumb walk needs to know about pages.
pub trait PageSource: PageResolver + PageExistence + ContentProvider {}

impl<T: PageResolver + PageExistence + ContentProvider + ?Sized> PageSource for T {}

/// Produces output fragments. Implementations own all escaping.
pub trait LinkRenderer {
    /// Link to an existing page.
    fn known_link(&self, page: &PageId, label: &str) -> String;

    /// Link to a page that does not exist yet.
    fn broken_link(&self, page: &PageId, label: &str) -> String;

    /// Plain text fragment.
    fn text(&self, text: &str) -> String;
}

/// Receives the cache dependencies discovered while rendering.
pub trait DependencyRecorder {
    /// `page` was linked, or its existence decided what the trail shows.
    fn record_link(&mut self, page: &PageId);

    /// The content of `page` at `revision_id` was read.
    fn record_content(&mut self, page: &PageId, revision_id: &str);
}
