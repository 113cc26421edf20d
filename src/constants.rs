//! Constants shared across the crumbtrail codebase.
//!
//! Directive markers, output markup identifiers, and the defaults used by
//! [`crate::config`] live here so that the scanner, the renderer and the
//! configuration layer agree on them.

/// Opening marker of the inline parent directive (without the closing `>`).
pub const DIRECTIVE_OPEN: &str = "<crumb:trail";

/// Explicit close marker of the inline parent directive.
pub const DIRECTIVE_CLOSE: &str = "</crumb:trail>";

/// Tag name of the directive, used when writing a directive back out.
pub const DIRECTIVE_TAG: &str = "crumb:trail";

/// Attribute overriding how a page displays itself at the end of a trail.
pub const SELF_ATTRIBUTE: &str = "self";

/// Separator between the parent path and its display label in a directive body.
pub const BODY_SEPARATOR: char = '|';

/// `id` attribute of the container element wrapping every rendered trail.
pub const CONTAINER_ID: &str = "crumbtrail";

/// Style class added to the container when the trail must not be printed.
pub const NO_PRINT_CLASS: &str = "noprint";

/// Default delimiter between trail fragments.
pub const DEFAULT_DELIMITER: &str = " &gt; ";

/// Default number of trail entries, the current page included.
pub const DEFAULT_MAX_DEPTH: i64 = 5;

/// Default label put in front of a truncated trail.
pub const DEFAULT_OVERFLOW_PREFIX: &str = "[...]";

/// Default separator used to find the page name inside a referrer URL.
pub const DEFAULT_URL_PATH_SEPARATOR: &str = "?title=";

/// Default article path; `$1` is replaced with the page's URL key.
pub const DEFAULT_ARTICLE_PATH: &str = "/wiki/$1";

/// Default file extension of pages in a directory-backed store.
pub const DEFAULT_PAGE_EXTENSION: &str = "wiki";

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "CRUMBTRAIL_CONFIG_PATH";

/// Number of hex characters kept from a content hash to form a revision id.
pub const REVISION_ID_LEN: usize = 12;
