//! Mock Freshservice API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! Freshservice custom object records API for integration and end-to-end
//! testing. Unlike wiremock which mocks at the HTTP level per-test, this
//! server maintains state across requests, enabling realistic workflow
//! testing.
//!
//! # Example
//!
//! ```ignore
//! use freshservice::mock_server::MockServer;
//! use freshservice::{CustomObjectRecordClient, FreshserviceClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = FreshserviceClient::new("test-key", server.url()).unwrap();
//!     let records = CustomObjectRecordClient::<serde_json::Value>::new(client);
//!
//!     // Server comes with default fixtures
//!     let page = records.list(1, 0).await.unwrap();
//!     assert_eq!(page.len(), 3);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, ASSETS_OBJECT_ID, VENDORS_OBJECT_ID};
pub use server::MockServer;
pub use state::{MockCustomObject, MockState};
