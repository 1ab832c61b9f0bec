//! Freshservice custom object records client library.
//!
//! A Rust library for managing the records of Freshservice custom objects.
//! Each operation is a single HTTP round trip whose JSON response is decoded
//! into typed envelopes around a caller-defined payload.
//!
//! # Quick Start
//!
//! ```no_run
//! use freshservice::{
//!     CreateCustomObjectRecordRequest, CustomObjectRecordClient, FreshserviceClient,
//! };
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> freshservice::Result<()> {
//!     // Create client from environment variables
//!     let client = FreshserviceClient::from_env()?;
//!     let records = CustomObjectRecordClient::<serde_json::Value>::new(client);
//!
//!     // Create a record in custom object 42
//!     let created = records
//!         .create(42, CreateCustomObjectRecordRequest::new(json!({"name": "Widget"})))
//!         .await?;
//!     println!("Created: {}", created.custom_object.data);
//!
//!     // List the first page of records
//!     let page = records.list(42, 30).await?;
//!     println!("Found {} records", page.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`CustomObjectRecordClient`] - create, list, update and delete records
//! - [`Transport`] - the HTTP seam the record client is generic over
//! - [`FreshserviceClient`] - the reqwest-backed transport
//!
//! Request envelopes wrap the payload under `data`; single-record responses
//! wrap the record under `custom_object`; listings wrap records under
//! `records`.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `FRESHSERVICE_API_KEY` (required) - Your Freshservice API key
//! - `FRESHSERVICE_API_URL` (optional) - Full API base URL
//! - `FRESHSERVICE_DOMAIN` (optional) - Helpdesk domain, used when
//!   `FRESHSERVICE_API_URL` is unset (`acme` means `https://acme.freshservice.com/api/v2/`)

mod client;
mod error;
mod models;
mod records;
mod traits;

pub mod cli;
pub mod mcp;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{api_url_for_domain, FreshserviceClient};
pub use error::{FreshserviceError, Result};
pub use records::CustomObjectRecordClient;

// Re-export traits
pub use traits::{DeleteOutcome, Transport};

// Re-export models
pub use models::{
    CreateCustomObjectRecordRequest, CreateCustomObjectRecordResponse, CustomObjectRecord,
    CustomObjectRecordMetadata, ListCustomObjectRecordsResponse, UpdateCustomObjectRecordRequest,
    UpdateCustomObjectRecordResponse,
};
