//! Breadcrumb trail resolution.
//!
//! [`ChainResolver`] turns a page and its inline declaration into a rendered
//! trail by following declared parents upward. Each render is independent:
//! the visited list, the trail being built and the collected
//! [`DependencySet`] live only for the duration of one call, and the
//! dependencies come back as part of the [`RenderResult`].
//!
//! # Termination
//!
//! A walk always ends, for one of these reasons (see [`Termination`]):
//!
//! - the configured maximum depth is zero or negative, and nothing is rendered
//! - the last page reached declares no parent
//! - the depth bound was hit, and the trail starts with the overflow prefix
//! - a declared parent is malformed, missing, repeats a page already on the
//!   trail, or has no directive of its own
//!
//! Only the first reason produces an empty trail. In every other case the
//! fragments collected before the stop are kept.
//!
//! # Dependencies
//!
//! Every ancestor that was linked, whose content was read, or whose absence
//! cut the trail short is reported. A host that caches rendered pages must
//! invalidate the cached trail when any of them changes.

pub mod chain;
pub mod dependencies;

pub use chain::{ChainResolver, RenderResult, SelfDisplay, Termination};
pub use dependencies::{Dependency, DependencySet};
