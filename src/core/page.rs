//! Page identity.
//!
//! A [`PageId`] is the comparable key of a document: an optional namespace plus a
//! normalized title. Two spellings that normalize to the same title (for example
//! `parent_page` and `Parent Page`) produce equal identifiers, which is what makes
//! cycle detection in the resolver reliable.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use super::CrumbError;

/// Characters and sequences that can never be part of a title.
static ILLEGAL_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[#<>\[\]|{}\x00-\x1f\x7f]|%[0-9A-Fa-f]{2}").expect("static regex is valid")
});

/// Longest title accepted, in bytes.
const MAX_TITLE_BYTES: usize = 255;

/// Identifier of a page: namespace plus normalized title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PageId {
    /// Canonical namespace name, empty for the main namespace.
    namespace: String,
    /// Normalized title with spaces, first letter upper-cased.
    title: String,
}

impl PageId {
    /// Parse a page reference such as `Help:Getting_started` or `parent page`.
    ///
    /// `namespaces` lists the known namespace names. A `Prefix:` is split off only
    /// when the prefix matches one of them (case-insensitively); otherwise the colon
    /// is part of the title.
    ///
    /// # Errors
    ///
    /// Returns [`CrumbError::InvalidReference`] when the title is empty, too long,
    /// contains characters that are not allowed in titles, or is a relative path
    /// segment.
    pub fn parse(text: &str, namespaces: &[String]) -> Result<Self, CrumbError> {
        let invalid = |reason: &str| CrumbError::InvalidReference {
            path: text.to_string(),
            reason: reason.to_string(),
        };

        let mut normalized = normalize_whitespace(text);
        if let Some(rest) = normalized.strip_prefix(':') {
            normalized = rest.trim_start().to_string();
        }

        let (namespace, title) = match normalized.split_once(':') {
            Some((prefix, rest)) => {
                let prefix = prefix.trim_end();
                match namespaces.iter().find(|ns| ns.eq_ignore_ascii_case(prefix)) {
                    Some(ns) => (ns.clone(), rest.trim_start().to_string()),
                    None => (String::new(), normalized.clone()),
                }
            }
            None => (String::new(), normalized.clone()),
        };

        if title.is_empty() {
            return Err(invalid("empty title"));
        }
        if title.len() > MAX_TITLE_BYTES {
            return Err(invalid("title is too long"));
        }
        if ILLEGAL_TITLE.is_match(&title) {
            return Err(invalid("title contains illegal characters"));
        }
        if title == "." || title == ".." || title.starts_with("./") || title.starts_with("../") {
            return Err(invalid("relative path segments are not titles"));
        }

        Ok(Self {
            namespace,
            title: capitalize_first(&title),
        })
    }

    /// Build an identifier from already-normalized parts.
    #[must_use]
    pub fn new(namespace: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            title: title.into(),
        }
    }

    /// Canonical namespace name, empty for the main namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The natural title, without namespace.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title including the namespace prefix, e.g. `Help:Getting started`.
    #[must_use]
    pub fn prefixed_text(&self) -> String {
        if self.namespace.is_empty() {
            self.title.clone()
        } else {
            format!("{}:{}", self.namespace, self.title)
        }
    }

    /// Underscored form of [`prefixed_text`](Self::prefixed_text), used in URLs and file names.
    #[must_use]
    pub fn db_key(&self) -> String {
        self.prefixed_text().replace(' ', "_")
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefixed_text())
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.replace('_', " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capitalize_first(title: &str) -> String {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
