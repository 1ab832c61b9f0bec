//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! freshservice binary.

use clap::{Parser, Subcommand};

use crate::client::{api_url_for_domain, FreshserviceClient};
use crate::error::{FreshserviceError, Result};

/// Freshservice custom object records command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "freshservice",
    about = "Manage Freshservice custom object records",
    version
)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Freshservice API key.
    #[arg(long, global = true, env = "FRESHSERVICE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Full API base URL (e.g. https://acme.freshservice.com/api/v2).
    #[arg(long, global = true, env = "FRESHSERVICE_API_URL")]
    pub api_url: Option<String>,

    /// Helpdesk domain, used when --api-url is not given.
    #[arg(long, global = true, env = "FRESHSERVICE_DOMAIN")]
    pub domain: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a record in a custom object.
    Create {
        /// The custom object ID.
        #[arg(long)]
        object: u64,

        /// Record data as a JSON object.
        #[arg(long, value_parser = parse_json)]
        data: serde_json::Value,
    },

    /// List the records of a custom object (single page).
    List {
        /// The custom object ID.
        #[arg(long)]
        object: u64,

        /// Number of records per page. Zero or less uses the server default.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page_size: i64,
    },

    /// Replace the data of a record.
    Update {
        /// The custom object ID.
        #[arg(long)]
        object: u64,

        /// The record ID.
        #[arg(long)]
        record: u64,

        /// Record data as a JSON object.
        #[arg(long, value_parser = parse_json)]
        data: serde_json::Value,
    },

    /// Delete a record.
    Delete {
        /// The custom object ID.
        #[arg(long)]
        object: u64,

        /// The record ID.
        #[arg(long)]
        record: u64,
    },
}

fn parse_json(raw: &str) -> std::result::Result<serde_json::Value, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))?;
    if !value.is_object() {
        return Err("record data must be a JSON object".to_string());
    }
    Ok(value)
}

impl Cli {
    /// Build an API client from the connection arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key or the API location is missing.
    pub fn client(&self) -> Result<FreshserviceClient> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            FreshserviceError::ConfigMissing(
                "--api-key or FRESHSERVICE_API_KEY is required".to_string(),
            )
        })?;

        let base_url = match (&self.api_url, &self.domain) {
            (Some(url), _) => url.clone(),
            (None, Some(domain)) => api_url_for_domain(domain),
            (None, None) => {
                return Err(FreshserviceError::ConfigMissing(
                    "--api-url or --domain (FRESHSERVICE_API_URL or FRESHSERVICE_DOMAIN) is required"
                        .to_string(),
                ))
            }
        };

        FreshserviceClient::new(api_key, &base_url)
    }
}
