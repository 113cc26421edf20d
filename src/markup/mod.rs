//! Output fragments for breadcrumb trails.
//!
//! [`HtmlLinkRenderer`] produces wiki-style anchors for pages that exist and
//! "red links" for pages that do not; [`PlainLinkRenderer`] produces bare labels
//! for terminal output. [`container`] wraps a finished trail in its output element.

use quick_xml::escape::escape;

use crate::config::LinksConfig;
use crate::constants::{CONTAINER_ID, NO_PRINT_CLASS};
use crate::core::PageId;
use crate::host::LinkRenderer;

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    escape(text).into_owned()
}

/// Wrap `trail` (already markup) in the breadcrumb container element.
///
/// The container carries the no-print class unless `printable` is set.
#[must_use]
pub fn container(trail: &str, printable: bool) -> String {
    if printable {
        format!(r#"<div id="{CONTAINER_ID}">{trail}</div>"#)
    } else {
        format!(r#"<div id="{CONTAINER_ID}" class="{NO_PRINT_CLASS}">{trail}</div>"#)
    }
}

/// Renders HTML anchors using an article path such as `/wiki/$1`.
#[derive(Debug, Clone)]
pub struct HtmlLinkRenderer {
    article_path: String,
}

impl HtmlLinkRenderer {
    /// Create a renderer for the given article path; `$1` is replaced with the page key.
    pub fn new(article_path: impl Into<String>) -> Self {
        Self {
            article_path: article_path.into(),
        }
    }

    /// Create a renderer from the `[links]` configuration section.
    #[must_use]
    pub fn from_config(config: &LinksConfig) -> Self {
        Self::new(&config.article_path)
    }

    /// URL of `page`'s article.
    #[must_use]
    pub fn article_url(&self, page: &PageId) -> String {
        self.article_path.replace("$1", &url_key(page))
    }

    fn edit_url(&self, page: &PageId) -> String {
        let url = self.article_url(page);
        let joiner = if url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!("{url}{joiner}action=edit&redlink=1")
    }
}

impl LinkRenderer for HtmlLinkRenderer {
    fn known_link(&self, page: &PageId, label: &str) -> String {
        format!(
            r#"<a href="{}" title="{}">{}</a>"#,
            escape_html(&self.article_url(page)),
            escape_html(&page.prefixed_text()),
            escape_html(label)
        )
    }

    fn broken_link(&self, page: &PageId, label: &str) -> String {
        format!(
            r#"<a href="{}" class="new" title="{} (page does not exist)">{}</a>"#,
            escape_html(&self.edit_url(page)),
            escape_html(&page.prefixed_text()),
            escape_html(label)
        )
    }

    fn text(&self, text: &str) -> String {
        escape_html(text)
    }
}

/// Renders labels only, without any markup or escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLinkRenderer;

impl LinkRenderer for PlainLinkRenderer {
    fn known_link(&self, _page: &PageId, label: &str) -> String {
        label.to_string()
    }

    fn broken_link(&self, _page: &PageId, label: &str) -> String {
        label.to_string()
    }

    fn text(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Percent-encoded page key; `/` and `:` stay readable.
fn url_key(page: &PageId) -> String {
    urlencoding::encode(&page.db_key()).replace("%2F", "/").replace("%3A", ":")
}
