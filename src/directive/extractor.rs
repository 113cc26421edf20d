//! Scanner for the inline parent directive.
//!
//! Documents declare their parent with a single directive embedded anywhere in
//! their raw text:
//!
//! ```text
//! <crumb:trail self="Short name">Parent page|Label shown for the parent</crumb:trail>
//! <crumb:trail>Parent page</crumb:trail>
//! <crumb:trail self="Overview"/>
//! ```
//!
//! This is a best-effort, first-match-only scanner and not a markup parser: it
//! understands exactly one element with attributes and a text body. Anything it
//! cannot make sense of yields `None`, never an error.

use quick_xml::escape::{escape, unescape};
use serde::Serialize;

use crate::constants::{
    BODY_SEPARATOR, DIRECTIVE_CLOSE, DIRECTIVE_OPEN, DIRECTIVE_TAG, SELF_ATTRIBUTE,
};

/// A parent declaration extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Unresolved reference to the parent page, trimmed. Empty means "no parent".
    pub parent_path: String,

    /// Label to show for the parent's link; `None` when absent or blank.
    ///
    /// Everything after the first `|` belongs to the label, further `|` included.
    pub display_label: Option<String>,

    /// Raw value of the `self` attribute, `None` when the attribute is absent.
    ///
    /// An empty or blank string is meaningful: it hides the page's own entry
    /// when the page is the end of a trail.
    pub self_label: Option<String>,
}

impl Declaration {
    /// Build a declaration from a directive body of the form `Parent` or `Parent|Label`.
    ///
    /// The body is split on the first `|` only, so `A|B|C` declares parent `A`
    /// with label `B|C`. Both parts are trimmed.
    #[must_use]
    pub fn from_body(body: &str, self_label: Option<String>) -> Self {
        let mut parts = body.splitn(2, BODY_SEPARATOR).map(str::trim);
        let parent_path = parts.next().unwrap_or_default().to_string();
        let display_label = parts.next().filter(|label| !label.is_empty()).map(str::to_string);

        Self {
            parent_path,
            display_label,
            self_label,
        }
    }

    /// Whether a non-empty parent path is declared.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        !self.parent_path.is_empty()
    }

    /// The directive body this declaration was built from, `Parent` or `Parent|Label`.
    #[must_use]
    pub fn body(&self) -> String {
        match &self.display_label {
            Some(label) => format!("{}{BODY_SEPARATOR}{label}", self.parent_path),
            None => self.parent_path.clone(),
        }
    }
}

/// Extract the first parent declaration from raw document text.
///
/// Returns `None` when the text has no directive, or when the first directive is
/// truncated or malformed (unterminated tag, bad attribute syntax, nested markup,
/// undecodable entities).
///
/// # Examples
///
/// ```rust
/// use crumbtrail_cli::directive::extract_declaration;
///
/// let text = "Intro.\n<crumb:trail self=\"Setup\">Guide|User guide</crumb:trail>\nMore.";
/// let declaration = extract_declaration(text).unwrap();
/// assert_eq!(declaration.parent_path, "Guide");
/// assert_eq!(declaration.display_label.as_deref(), Some("User guide"));
/// assert_eq!(declaration.self_label.as_deref(), Some("Setup"));
///
/// assert!(extract_declaration("no directive here").is_none());
/// ```
#[must_use]
pub fn extract_declaration(text: &str) -> Option<Declaration> {
    let start = find_directive_start(text)?;
    let tag = scan_open_tag(text, start + DIRECTIVE_OPEN.len())?;

    let body = if tag.self_closing {
        ""
    } else {
        let rest = &text[tag.end..];
        let close = rest.find(DIRECTIVE_CLOSE)?;
        &rest[..close]
    };

    // Nested markup is not supported
    if body.contains('<') {
        return None;
    }
    let body = unescape(body).ok()?;

    let self_label = match tag.attribute(SELF_ATTRIBUTE) {
        Some(raw) => Some(unescape(raw).ok()?.into_owned()),
        None => None,
    };

    Some(Declaration::from_body(&body, self_label))
}

/// Build directive text for `body`, escaping it so that [`extract_declaration`] reads it back.
#[must_use]
pub fn format_directive(body: &str) -> String {
    format!("<{DIRECTIVE_TAG}>{}</{DIRECTIVE_TAG}>", escape(body))
}

/// Opening tag of a directive as found by [`scan_open_tag`].
struct OpenTag<'a> {
    attributes: Vec<(&'a str, &'a str)>,
    self_closing: bool,
    /// Byte offset just past the tag's closing `>`.
    end: usize,
}

impl<'a> OpenTag<'a> {
    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

/// Find the first directive marker that is followed by a tag boundary.
fn find_directive_start(text: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find(DIRECTIVE_OPEN) {
        let start = offset + found;
        let after = start + DIRECTIVE_OPEN.len();
        match text[after..].chars().next() {
            Some(c) if c.is_whitespace() || c == '/' || c == '>' => return Some(start),
            Some(_) => offset = after,
            None => return None,
        }
    }
    None
}

/// Scan attributes up to the end of the opening tag, starting right after the tag name.
fn scan_open_tag(text: &str, mut pos: usize) -> Option<OpenTag<'_>> {
    let bytes = text.as_bytes();
    let mut attributes: Vec<(&str, &str)> = Vec::new();

    loop {
        pos = skip_whitespace(bytes, pos);
        match *bytes.get(pos)? {
            b'>' => {
                return Some(OpenTag {
                    attributes,
                    self_closing: false,
                    end: pos + 1,
                });
            }
            b'/' => {
                if bytes.get(pos + 1) != Some(&b'>') {
                    return None;
                }
                return Some(OpenTag {
                    attributes,
                    self_closing: true,
                    end: pos + 2,
                });
            }
            _ => {
                let name_start = pos;
                while pos < bytes.len() && is_name_byte(bytes[pos]) {
                    pos += 1;
                }
                if pos == name_start {
                    return None;
                }
                let name = &text[name_start..pos];

                pos = skip_whitespace(bytes, pos);
                if bytes.get(pos) != Some(&b'=') {
                    return None;
                }
                pos = skip_whitespace(bytes, pos + 1);

                let quote = *bytes.get(pos)?;
                if quote != b'"' && quote != b'\'' {
                    return None;
                }
                let value_start = pos + 1;
                let value_len = text[value_start..].find(char::from(quote))?;
                let value = &text[value_start..value_start + value_len];
                if value.contains('<') {
                    return None;
                }
                pos = value_start + value_len + 1;

                // Attributes must be separated from whatever follows
                match bytes.get(pos) {
                    Some(b) if b.is_ascii_whitespace() || *b == b'/' || *b == b'>' => {}
                    _ => return None,
                }
                if attributes.iter().any(|(key, _)| *key == name) {
                    return None;
                }
                attributes.push((name, value));
            }
        }
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}
