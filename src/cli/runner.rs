//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::Illuminate;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::QueryParams;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Illuminate::connect(self.load_config()?).await?;

        match &self.cli.command {
            Commands::Fetch {
                resource,
                segments,
                params,
            } => self.fetch(&client, resource, segments, params).await,
            Commands::Assessment { id } => {
                let assessment = client.get_assessment(id).await?;
                self.output(&assessment)
            }
            Commands::Sites => self.output(&client.sites()),
            Commands::District => self.output(&json!({
                "district": client.district(),
                "sites": client.sites().len(),
            })),
        }
    }

    /// Load the client config and apply command-line overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };

        if let Some(mode) = self.cli.pagination {
            config.pagination = mode.into();
        }
        if let Some(workers) = self.cli.max_workers {
            config.max_workers = workers;
        }

        debug!(
            "Using {} pagination with {} workers against {}",
            config.pagination,
            config.max_workers,
            config.base_url()
        );
        Ok(config)
    }

    async fn fetch(
        &self,
        client: &Illuminate,
        resource: &str,
        segments: &[String],
        params: &[(String, String)],
    ) -> Result<()> {
        let query: QueryParams = params.iter().cloned().collect();

        let records = if resource.starts_with("get_") {
            client.call(resource, segments, &query).await?
        } else {
            client.fetch(resource, segments, &query).await?
        };

        debug!("Fetched {} records from {}", records.len(), resource);
        self.output(&records)
    }

    /// Output a value as JSON
    fn output<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{rendered}");
        Ok(())
    }
}
