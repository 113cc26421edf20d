//! Unit test suite for crumbtrail
//!
//! Exercises the breadcrumb logic through the public API, with pages held in a
//! [`MemoryPageStore`](crumbtrail_cli::host::MemoryPageStore).
//!
//! ```bash
//! cargo test --test unit
//! ```
//!
//! - **chain_scenarios**: trail rendering, truncation, cycles, broken parents
//! - **dependency_reporting**: which pages a trail is reported to depend on
//! - **preload_seeder**: directive suggestions for new pages

mod dependency_reporting;
mod preload_seeder;
