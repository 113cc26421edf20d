//! Inline parent directives.
//!
//! A document names its logical parent with a `<crumb:trail>` directive somewhere
//! in its raw text. This module finds and decodes that directive
//! ([`extract_declaration`]) and writes new ones ([`format_directive`]).

pub mod extractor;

pub use extractor::{Declaration, extract_declaration, format_directive};
