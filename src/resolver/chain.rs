//! Breadcrumb chain resolution.
//!
//! Starting from the current page and its inline declaration, the resolver
//! follows declared parents one page at a time: resolve the path, check for a
//! repeat, render a link, read the ancestor's text and extract its own
//! declaration. The walk is iterative and bounded twice: by
//! [`BreadcrumbConfig::max_depth`] and by the list of already visited pages.
//!
//! Nothing in here fails. Every problem met on the way (bad reference, cycle,
//! missing page, page without directive) ends the walk and is reported in
//! [`RenderResult::termination`]; the trail built so far is kept.

use std::collections::VecDeque;
use std::fmt;

use super::dependencies::{Dependency, DependencySet};
use crate::config::{BreadcrumbConfig, BrokenParentPolicy};
use crate::core::{CrumbError, PageId};
use crate::directive::{Declaration, extract_declaration};
use crate::host::{DependencyRecorder, LinkRenderer, PageSource};
use crate::markup;

/// How the current page shows itself at the end of its trail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelfDisplay {
    /// Use the page's natural title.
    #[default]
    Natural,
    /// Use a custom label.
    Custom(String),
    /// Do not show the page at all.
    Hidden,
}

impl SelfDisplay {
    /// Interpret a raw `self` attribute: absent means natural, blank means hidden.
    ///
    /// Custom labels are trimmed.
    #[must_use]
    pub fn from_attribute(attribute: Option<&str>) -> Self {
        match attribute.map(str::trim) {
            None => Self::Natural,
            Some("") => Self::Hidden,
            Some(label) => Self::Custom(label.to_string()),
        }
    }

    fn label<'a>(&'a self, page: &'a PageId) -> Option<&'a str> {
        match self {
            Self::Natural => Some(page.title()),
            Self::Custom(label) => Some(label.as_str()),
            Self::Hidden => None,
        }
    }
}

/// Why a breadcrumb walk ended.
#[derive(Debug, Clone)]
pub enum Termination {
    /// Output is switched off by configuration.
    Disabled,
    /// The last page reached declares no further parent.
    Exhausted,
    /// The depth bound was reached.
    Truncated,
    /// The walk stopped early on a non-fatal condition.
    Halted(CrumbError),
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::Exhausted => f.write_str("complete"),
            Self::Truncated => f.write_str("truncated at maximum depth"),
            Self::Halted(reason) => write!(f, "stopped: {reason}"),
        }
    }
}

/// Outcome of rendering one breadcrumb trail.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Fragments joined by the delimiter, root-most ancestor first.
    pub trail: String,
    /// The trail wrapped in its container element; empty when disabled.
    pub markup: String,
    /// Every page that influenced the trail.
    pub dependencies: Vec<Dependency>,
    /// Why the walk ended.
    pub termination: Termination,
}

impl RenderResult {
    fn disabled() -> Self {
        Self {
            trail: String::new(),
            markup: String::new(),
            dependencies: Vec::new(),
            termination: Termination::Disabled,
        }
    }

    /// Whether nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
}

/// Per-render walk state, discarded when the render is done.
struct ChainState {
    /// Pages already on the trail; the start page is always first.
    visited: Vec<PageId>,
    trail: VecDeque<String>,
    depth: i64,
    dependencies: DependencySet,
}

impl ChainState {
    fn new(start: PageId) -> Self {
        Self {
            visited: vec![start],
            trail: VecDeque::new(),
            depth: 0,
            dependencies: DependencySet::new(),
        }
    }

    fn has_visited(&self, page: &PageId) -> bool {
        self.visited.contains(page)
    }

    fn visit(&mut self, page: PageId) {
        self.visited.push(page);
        self.depth += 1;
    }

    fn prepend(&mut self, fragment: String) {
        self.trail.push_front(fragment);
    }
}

/// Walks declared parents and renders the breadcrumb trail.
///
/// # Examples
///
/// ```rust
/// use crumbtrail_cli::config::BreadcrumbConfig;
/// use crumbtrail_cli::host::MemoryPageStore;
/// use crumbtrail_cli::markup::PlainLinkRenderer;
/// use crumbtrail_cli::resolver::ChainResolver;
///
/// let mut store = MemoryPageStore::new();
/// store.insert("Home", "Welcome").unwrap();
/// let page = store.insert("Guide", "<crumb:trail>Home</crumb:trail>").unwrap();
///
/// let config = BreadcrumbConfig {
///     delimiter: " > ".to_string(),
///     ..BreadcrumbConfig::default()
/// };
/// let resolver = ChainResolver::new(&store, &PlainLinkRenderer, &config);
/// let result = resolver.render_directive(&page, "Home", None);
/// assert_eq!(result.trail, "Home > Guide");
/// ```
pub struct ChainResolver<'a> {
    pages: &'a dyn PageSource,
    links: &'a dyn LinkRenderer,
    config: &'a BreadcrumbConfig,
}

impl<'a> ChainResolver<'a> {
    /// Create a resolver over the given collaborators and configuration.
    pub fn new(pages: &'a dyn PageSource, links: &'a dyn LinkRenderer, config: &'a BreadcrumbConfig) -> Self {
        Self {
            pages,
            links,
            config,
        }
    }

    /// Render the trail for a directive as a host hands it over: the raw body
    /// (`Parent` or `Parent|Label`) and the raw `self` attribute, if any.
    #[must_use]
    pub fn render_directive(&self, start: &PageId, body: &str, self_attribute: Option<&str>) -> RenderResult {
        let declaration = Declaration::from_body(body, None);
        self.resolve_chain(start, &declaration, &SelfDisplay::from_attribute(self_attribute))
    }

    /// Render the trail for `start`, whose own declaration is `declaration`.
    ///
    /// `declaration.self_label` is ignored; `self_display` decides how `start`
    /// itself is shown.
    #[must_use]
    pub fn resolve_chain(
        &self,
        start: &PageId,
        declaration: &Declaration,
        self_display: &SelfDisplay,
    ) -> RenderResult {
        if self.config.is_disabled() {
            return RenderResult::disabled();
        }

        let mut state = ChainState::new(start.clone());
        if let Some(label) = self_display.label(start) {
            let fragment = if self.config.self_link {
                self.links.known_link(start, label)
            } else {
                self.links.text(label)
            };
            state.prepend(fragment);
            state.depth = 1;
        }

        let termination = self.walk(&mut state, declaration.clone());
        tracing::debug!("Breadcrumb for '{}' {}", start, termination);

        let trail = Vec::from(state.trail).join(&self.config.delimiter);
        RenderResult {
            markup: markup::container(&trail, self.config.printable),
            trail,
            dependencies: state.dependencies.into_vec(),
            termination,
        }
    }

    fn walk(&self, state: &mut ChainState, mut declaration: Declaration) -> Termination {
        let max_depth = self.config.max_depth;

        while state.depth < max_depth {
            if !declaration.has_parent() {
                return Termination::Exhausted;
            }

            let parent = match self.pages.resolve(&declaration.parent_path) {
                Ok(parent) => parent,
                Err(error) => {
                    log_walk_end(&error);
                    if self.config.mark_invalid_references {
                        let marker = format!("#INVALID: {}#", declaration.parent_path);
                        state.prepend(self.links.text(&marker));
                    }
                    return Termination::Halted(error);
                }
            };

            if state.has_visited(&parent) {
                tracing::debug!("'{}' is already on the trail, ending breadcrumb walk", parent);
                return Termination::Halted(CrumbError::CycleDetected {
                    page: parent.prefixed_text(),
                });
            }
            state.visit(parent.clone());

            if state.depth >= max_depth {
                state.prepend(self.config.overflow_prefix.clone());
                return Termination::Truncated;
            }

            match self.step(state, &parent, &declaration) {
                Ok(next) => declaration = next,
                Err(error) => {
                    log_walk_end(&error);
                    return Termination::Halted(error);
                }
            }
        }

        // Only reachable when the current page alone fills the trail
        if declaration.has_parent() {
            Termination::Truncated
        } else {
            Termination::Exhausted
        }
    }

    /// Render `parent` and read its own declaration.
    fn step(&self, state: &mut ChainState, parent: &PageId, declaration: &Declaration) -> Result<Declaration, CrumbError> {
        let exists = self.pages.exists(parent);
        if !exists && self.config.broken_parent_policy == BrokenParentPolicy::Strict {
            // Creating the page must invalidate this trail
            state.dependencies.record_link(parent);
            return Err(CrumbError::MissingAncestor {
                page: parent.prefixed_text(),
            });
        }

        let label = declaration.display_label.clone().unwrap_or_else(|| parent.prefixed_text());
        let link = if exists {
            self.links.known_link(parent, &label)
        } else {
            self.links.broken_link(parent, &label)
        };
        state.prepend(link);
        state.dependencies.record_link(parent);

        let revision = self.pages.latest_revision(parent).ok_or_else(|| CrumbError::MissingAncestor {
            page: parent.prefixed_text(),
        })?;
        state.dependencies.record_content(parent, &revision.revision_id);

        extract_declaration(&revision.text).ok_or_else(|| CrumbError::NoDeclaration {
            page: parent.prefixed_text(),
        })
    }
}

/// Walk conditions are routine; anything else is a collaborator failing.
fn log_walk_end(error: &CrumbError) {
    if error.is_walk_condition() {
        tracing::debug!("Ending breadcrumb walk: {}", error);
    } else {
        tracing::warn!("Breadcrumb walk aborted by page source: {}", error);
    }
}
