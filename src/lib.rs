//! crumbtrail - breadcrumb trails for documents that declare their parent inline
//!
//! Pages carry a small directive naming their logical parent:
//!
//! ```text
//! <crumb:trail self="Setup">Help:Getting Started|Start here</crumb:trail>
//! ```
//!
//! Following those declarations upward from a page yields its breadcrumb trail,
//! rendered root first: `Start here > Setup`. Parent relations are free-form
//! text written by page authors, so the chain may be broken, malformed or
//! cyclic. Rendering never fails; it stops where the chain stops making sense
//! and keeps what it has.
//!
//! # Core Modules
//!
//! - [`directive`] - finds and parses the first directive in a page's text
//! - [`resolver`] - walks declared parents, bounded by depth and cycle checks,
//!   and reports which pages the trail depends on
//! - [`seeder`] - proposes a directive for a page created from a link on its parent
//!
//! ## Host Integration
//! - [`host`] - the traits through which pages are resolved, checked and read,
//!   plus directory-backed and in-memory stores
//! - [`markup`] - HTML and plain-text link rendering
//!
//! ## Supporting Modules
//! - [`config`] - rendering options and the `~/.crumbtrail/config.toml` file
//! - [`core`] - page identifiers and the error type
//! - [`cli`] - the `crumbtrail` command-line interface
//! - [`constants`] - directive markers and defaults
//!
//! # Example
//!
//! ```rust
//! use crumbtrail_cli::config::BreadcrumbConfig;
//! use crumbtrail_cli::directive::extract_declaration;
//! use crumbtrail_cli::host::MemoryPageStore;
//! use crumbtrail_cli::markup::PlainLinkRenderer;
//! use crumbtrail_cli::resolver::{ChainResolver, SelfDisplay};
//!
//! let mut pages = MemoryPageStore::new();
//! pages.insert("Handbook", "Table of contents").unwrap();
//! pages.insert("Setup", "<crumb:trail>Handbook</crumb:trail>").unwrap();
//! let page = pages.insert("Install", "<crumb:trail>Setup</crumb:trail>").unwrap();
//!
//! let declaration = extract_declaration("<crumb:trail>Setup</crumb:trail>").unwrap();
//! let config = BreadcrumbConfig {
//!     delimiter: " / ".to_string(),
//!     ..BreadcrumbConfig::default()
//! };
//! let result = ChainResolver::new(&pages, &PlainLinkRenderer, &config)
//!     .resolve_chain(&page, &declaration, &SelfDisplay::Natural);
//!
//! assert_eq!(result.trail, "Handbook / Setup / Install");
//! ```

// Core functionality
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

// Breadcrumb logic
pub mod directive;
pub mod resolver;
pub mod seeder;

// Host integration
pub mod host;
pub mod markup;

// test_utils is available for tests and when the test-utils feature is enabled
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
