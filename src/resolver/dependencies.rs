//! Cache dependencies of a rendered trail.

use serde::Serialize;

use crate::core::PageId;
use crate::host::DependencyRecorder;

/// One page a rendered trail depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dependency {
    /// The page was linked, or its existence decided what the trail shows.
    Link {
        /// The linked page
        page: PageId,
    },
    /// The page's content was read at the given revision.
    Content {
        /// The page that was read
        page: PageId,
        /// Revision that was read
        revision: String,
    },
}

impl Dependency {
    /// The page this dependency refers to.
    #[must_use]
    pub const fn page(&self) -> &PageId {
        match self {
            Self::Link {
                page,
            }
            | Self::Content {
                page,
                ..
            } => page,
        }
    }
}

/// Insertion-ordered set of dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    entries: Vec<Dependency>,
}

impl DependencySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded dependencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.entries.iter()
    }

    /// Distinct pages, in order of first appearance.
    #[must_use]
    pub fn pages(&self) -> Vec<&PageId> {
        let mut pages: Vec<&PageId> = Vec::new();
        for dependency in &self.entries {
            if !pages.contains(&dependency.page()) {
                pages.push(dependency.page());
            }
        }
        pages
    }

    /// Consume the set into a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Dependency> {
        self.entries
    }

    fn insert(&mut self, dependency: Dependency) {
        if !self.entries.contains(&dependency) {
            self.entries.push(dependency);
        }
    }
}

impl DependencyRecorder for DependencySet {
    fn record_link(&mut self, page: &PageId) {
        self.insert(Dependency::Link {
            page: page.clone(),
        });
    }

    fn record_content(&mut self, page: &PageId, revision_id: &str) {
        self.insert(Dependency::Content {
            page: page.clone(),
            revision: revision_id.to_string(),
        });
    }
}
