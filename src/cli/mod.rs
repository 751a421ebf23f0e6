//! CLI module
//!
//! Command-line interface for listing and paging API resources.
//!
//! # Commands
//!
//! - `list` - Traverse a resource and print records as JSON lines
//! - `page` - Fetch a single page (first, or a server-issued URL)
//! - `resources` - List built-in resource names

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
