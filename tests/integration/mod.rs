//! Integration test suite for crumbtrail
//!
//! End-to-end tests over page trees written to temporary directories, both
//! through the library and through the `crumbtrail` binary.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **cli_commands**: `render`, `suggest` and `extract` as a user runs them
//! - **config_loading**: configuration file handling of the binary
//! - **page_store**: breadcrumb rendering over the directory page store

mod cli_commands;
mod config_loading;
mod page_store;
