//! CLI runner - executes the lookup

use crate::cli::commands::Cli;
use crate::client::VariotClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the lookup and print the record
    pub async fn run(&self) -> Result<()> {
        let output = self.lookup().await?;
        println!("{output}");
        Ok(())
    }

    /// Resolve the client configuration: file first, then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(url) = &self.cli.url {
            config.root_url.clone_from(url);
        }
        if let Some(key) = &self.cli.apikey {
            config.api_key = Some(key.clone());
        }
        Ok(config)
    }

    /// Probe the instance, fetch the requested record, and render it
    pub async fn lookup(&self) -> Result<String> {
        let client = VariotClient::new(&self.client_config()?)?;

        if !client.is_up().await {
            return Err(Error::Unreachable {
                url: client.root_url().to_string(),
            });
        }

        let record = match (&self.cli.vulnerability_id, &self.cli.exploit_id) {
            (Some(id), _) => {
                info!("Looking up vulnerability {}", id);
                client.get_vulnerability(id, self.cli.jsonld).await?
            }
            (None, Some(id)) => {
                info!("Looking up exploit {}", id);
                client.get_exploit(id, self.cli.jsonld).await?
            }
            (None, None) => {
                return Err(Error::config(
                    "one of --vulnerability_id or --exploit_id is required",
                ));
            }
        };

        Ok(serde_json::to_string_pretty(&record)?)
    }
}

/// Message printed when a run fails
///
/// A failed reachability check is reported bare, everything else with an
/// `Error: ` prefix.
pub fn failure_message(err: &Error) -> String {
    match err {
        Error::Unreachable { .. } => err.to_string(),
        other => format!("Error: {other}"),
    }
}
