//! Options of the breadcrumb walk itself (the `[breadcrumb]` section).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DEFAULT_DELIMITER, DEFAULT_MAX_DEPTH, DEFAULT_OVERFLOW_PREFIX, DEFAULT_URL_PATH_SEPARATOR,
};

/// What to do with a declared ancestor that does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenParentPolicy {
    /// End the trail at the last existing ancestor.
    Strict,
    /// Show the missing ancestor as a broken link; the trail ends right after it.
    #[default]
    Permissive,
}

impl fmt::Display for BrokenParentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Permissive => f.write_str("permissive"),
        }
    }
}

/// Rendering options for breadcrumb trails.
///
/// `delimiter` and `overflow_prefix` are inserted verbatim and may contain markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Inserted between trail fragments.
    pub delimiter: String,

    /// Maximum number of trail entries including the current page; `<= 0` disables output.
    pub max_depth: i64,

    /// Shown in front of a trail that was cut at `max_depth`.
    pub overflow_prefix: String,

    /// Render the current page as a link to itself.
    pub self_link: bool,

    /// When false the output container carries the no-print style class.
    pub printable: bool,

    /// Handling of ancestors that do not exist.
    pub broken_parent_policy: BrokenParentPolicy,

    /// Show `#INVALID: path#` when a declared parent path cannot be resolved.
    pub mark_invalid_references: bool,

    /// Separator after which the page name follows in a referrer URL.
    pub url_path_separator: String,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            overflow_prefix: DEFAULT_OVERFLOW_PREFIX.to_string(),
            self_link: false,
            printable: false,
            broken_parent_policy: BrokenParentPolicy::default(),
            mark_invalid_references: true,
            url_path_separator: DEFAULT_URL_PATH_SEPARATOR.to_string(),
        }
    }
}

impl BreadcrumbConfig {
    /// Whether breadcrumb output is switched off entirely.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.max_depth <= 0
    }
}
