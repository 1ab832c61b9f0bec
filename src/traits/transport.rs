//! Transport trait for executing Freshservice API calls.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Outcome of a DELETE request that completed without a hard error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Whether the server reported the deletion as successful.
    pub success: bool,
    /// Raw response body, kept for diagnostics.
    pub body: String,
}

impl DeleteOutcome {
    /// A successful deletion with an empty body.
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            success: true,
            body: String::new(),
        }
    }

    /// A completed but unsuccessful deletion.
    #[must_use]
    pub fn failed(body: impl Into<String>) -> Self {
        Self {
            success: false,
            body: body.into(),
        }
    }
}

/// Issues authenticated HTTP calls and decodes JSON bodies.
///
/// Paths are relative to the API base URL (e.g. `objects/42/records`) and may
/// carry a query string. Implementations decide what counts as a hard
/// failure. For DELETE, a response that completed but was not successful is
/// reported through [`DeleteOutcome::success`] instead of an error.
///
/// [`FreshserviceClient`](crate::FreshserviceClient) is the reqwest-backed
/// implementation. Tests can plug in an in-memory one.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET and decode the response body.
    async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned + Send;

    /// Issue a POST with a JSON body and decode the response body.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send;

    /// Issue a PUT with a JSON body and decode the response body.
    async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send;

    /// Issue a DELETE.
    async fn delete(&self, path: &str) -> Result<DeleteOutcome>;
}
