//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// pagewire CLI
#[derive(Parser, Debug)]
#[command(name = "pagewire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL (e.g. https://api.example.com)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Extra header, as `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", global = true)]
    pub headers: Vec<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records of a resource as JSON lines
    List {
        /// Built-in resource name (see `resources`)
        resource: String,

        /// Filter, as `Name=value` (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Stop after this many records
        #[arg(short, long)]
        limit: Option<usize>,

        /// Records per page
        #[arg(short, long)]
        page_size: Option<u32>,
    },

    /// Fetch a single page of a resource
    Page {
        /// Built-in resource name (see `resources`)
        resource: String,

        /// Server-issued page URL; the first page when omitted
        #[arg(short, long)]
        url: Option<String>,

        /// Records per page
        #[arg(short, long)]
        page_size: Option<u32>,
    },

    /// List built-in resource names
    Resources,
}
