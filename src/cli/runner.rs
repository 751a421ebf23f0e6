//! CLI command execution

use super::commands::{Cli, Commands};
use crate::error::{Error, Result};
use crate::fetch::{HttpFetcherConfig, HttpPageFetcher};
use crate::list::{ListClient, ListOptions};
use crate::resources;
use std::sync::Arc;

/// Executes parsed CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List {
                resource,
                filters,
                limit,
                page_size,
            } => {
                let client = self.client(resource)?;
                let mut options = ListOptions::new();
                options.filters = parse_pairs(filters, '=')?;
                options.page_size = *page_size;
                options.limit = *limit;

                let records = client.list(&options).await?;
                for record in &records {
                    println!("{}", record.to_json());
                }
                Ok(())
            }

            Commands::Page {
                resource,
                url,
                page_size,
            } => {
                let client = self.client(resource)?;

                let page = match url {
                    Some(target) => client.page_at(target).await?,
                    None => {
                        let mut options = ListOptions::new();
                        options.page_size = *page_size;
                        client.page(&options).await?
                    }
                };

                for record in page.records() {
                    println!("{}", record.to_json());
                }
                if let Some(next) = page.next_page_url() {
                    eprintln!("next page: {next}");
                }
                Ok(())
            }

            Commands::Resources => {
                for name in resources::list_builtin() {
                    println!("{name}");
                }
                Ok(())
            }
        }
    }

    /// Build a list client for a built-in resource
    fn client(&self, resource: &str) -> Result<ListClient> {
        let spec = resources::get_builtin(resource)
            .ok_or_else(|| Error::resource_not_found(resource))?;

        let base_url = self
            .cli
            .base_url
            .clone()
            .ok_or_else(|| Error::config("missing --base-url"))?;

        let mut config = HttpFetcherConfig::new(base_url);
        for (name, value) in parse_pairs(&self.cli.headers, ':')? {
            config = config.header(name, value);
        }

        Ok(ListClient::new(
            Arc::new(HttpPageFetcher::new(config)),
            spec,
        ))
    }
}

/// Parse `key<sep>value` arguments
fn parse_pairs(
    pairs: &[String],
    separator: char,
) -> Result<std::collections::HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once(separator)
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .ok_or_else(|| {
                    Error::config(format!("expected 'key{separator}value', got '{pair}'"))
                })
        })
        .collect()
}
