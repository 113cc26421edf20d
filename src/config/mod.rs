//! Configuration management for crumbtrail
//!
//! - `breadcrumb` - [`BreadcrumbConfig`], the per-render options of the trail walk
//! - `global` - [`CrumbtrailConfig`], the TOML configuration file with its
//!   `[breadcrumb]`, `[links]` and `[pages]` sections
//!
//! The resolver and the preload seeder only ever see an immutable
//! [`BreadcrumbConfig`]; the remaining sections configure the reference host
//! used by the CLI.

pub mod breadcrumb;
pub mod global;

pub use breadcrumb::{BreadcrumbConfig, BrokenParentPolicy};
pub use global::{CrumbtrailConfig, LinksConfig, PagesConfig};
