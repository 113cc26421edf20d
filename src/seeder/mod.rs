//! Directive suggestions for newly created pages.
//!
//! A new page is usually created by following a broken link on its future
//! parent. The seeder recovers that parent from the referrer URL and, if the
//! parent already takes part in a breadcrumb chain, proposes a directive
//! pointing back at it. Pages outside any chain never get a suggestion, so new
//! chains are only started on purpose.

use url::Url;

use crate::directive::{Declaration, extract_declaration, format_directive};
use crate::host::PageSource;
use crate::resolver::SelfDisplay;

/// Suggests a breadcrumb directive from the page an edit was started on.
pub struct PreloadSeeder<'a> {
    pages: &'a dyn PageSource,
}

impl<'a> PreloadSeeder<'a> {
    /// Create a seeder reading pages from `pages`.
    pub fn new(pages: &'a dyn PageSource) -> Self {
        Self {
            pages,
        }
    }

    /// Suggest directive text for a page created from `referer`.
    ///
    /// `url_path_separator` is what precedes the page title in the wiki's URLs:
    /// `"?title="` for query-style URLs, `"/"` for short URLs where the whole path
    /// is the title. Returns `None` whenever no parent can be found or the parent
    /// has no directive of its own.
    #[must_use]
    pub fn suggest(&self, referer: &str, url_path_separator: &str) -> Option<String> {
        let candidate = candidate_path(referer, url_path_separator)?;
        let decoded = match urlencoding::decode(&candidate) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                tracing::debug!("Referrer path '{}' is not valid UTF-8: {}", candidate, e);
                return None;
            }
        };

        let parent = match self.pages.resolve(&decoded) {
            Ok(parent) => parent,
            Err(e) => {
                tracing::debug!("No parent page for referrer '{}': {}", referer, e);
                return None;
            }
        };
        let revision = self.pages.latest_revision(&parent)?;
        let declaration = extract_declaration(&revision.text)?;

        let key = parent.prefixed_text();
        let display_label = match SelfDisplay::from_attribute(declaration.self_label.as_deref()) {
            SelfDisplay::Custom(label) if label != key => Some(label),
            _ => None,
        };
        let body = Declaration {
            parent_path: key,
            display_label,
            self_label: None,
        }
        .body();
        tracing::debug!("Suggesting parent '{}' for new page", body);
        Some(format_directive(&body))
    }
}

/// Extract the still-encoded parent path from a referrer.
///
/// Returns `None` when nothing is left after stripping.
#[must_use]
pub fn candidate_path(referer: &str, url_path_separator: &str) -> Option<String> {
    let candidate = if url_path_separator == "/" {
        // `Help:Page` parses as a URL with scheme `help`; only hosted URLs count
        match Url::parse(referer) {
            Ok(url) if url.has_host() => strip_leading_slash(url.path()).to_string(),
            _ => strip_leading_slash(cut_at(referer, &['?', '#'])).to_string(),
        }
    } else {
        let segment = match referer.rsplit_once(url_path_separator) {
            Some((_, segment)) => segment,
            None => referer,
        };
        cut_at(segment, &['&', '#']).to_string()
    };

    if candidate.trim().is_empty() {
        None
    } else {
        Some(candidate)
    }
}

fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

fn cut_at<'s>(text: &'s str, stops: &[char]) -> &'s str {
    match text.find(stops) {
        Some(index) => &text[..index],
        None => text,
    }
}
