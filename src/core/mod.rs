//! Core types for crumbtrail
//!
//! - [`error`] - [`CrumbError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`page`] - [`PageId`], the comparable identity of a document
//!
//! Everything else in the crate builds on these two modules.

pub mod error;
pub mod page;

pub use error::{CrumbError, ErrorContext, user_friendly_error};
pub use page::PageId;
