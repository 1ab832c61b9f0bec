//! Custom object record operations.
//!
//! [`CustomObjectRecordClient`] turns record calls into single HTTP round
//! trips against `objects/{id}/records`. It holds no state beyond the
//! transport handle.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::FreshserviceClient;
use crate::error::{FreshserviceError, Result};
use crate::models::{
    CreateCustomObjectRecordRequest, CreateCustomObjectRecordResponse,
    ListCustomObjectRecordsResponse, UpdateCustomObjectRecordRequest,
    UpdateCustomObjectRecordResponse,
};
use crate::traits::Transport;

/// Path of the record collection of a custom object.
fn records_path(custom_object_id: u64) -> String {
    format!("objects/{custom_object_id}/records")
}

/// Path of a single record.
fn record_path(custom_object_id: u64, record_id: u64) -> String {
    format!("objects/{custom_object_id}/records/{record_id}")
}

/// Path for listing records. Non-positive page sizes leave the server default.
fn list_path(custom_object_id: u64, page_size: i64) -> String {
    if page_size > 0 {
        format!("objects/{custom_object_id}/records?page_size={page_size}")
    } else {
        records_path(custom_object_id)
    }
}

/// Typed client for the records of Freshservice custom objects.
///
/// `T` is the caller's record payload. Any transport implementing
/// [`Transport`] works; [`FreshserviceClient`] is the default.
///
/// # Example
///
/// ```no_run
/// use freshservice::{
///     CreateCustomObjectRecordRequest, CustomObjectRecordClient, FreshserviceClient,
/// };
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Asset {
///     name: String,
/// }
///
/// # async fn example() -> freshservice::Result<()> {
/// let client = FreshserviceClient::from_env()?;
/// let records = CustomObjectRecordClient::<Asset>::new(client);
///
/// let created = records
///     .create(42, CreateCustomObjectRecordRequest::new(Asset { name: "Laptop".into() }))
///     .await?;
/// println!("created {}", created.custom_object.data.name);
///
/// let page = records.list(42, 50).await?;
/// if let Some(next) = page.next_page() {
///     println!("more at {next}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct CustomObjectRecordClient<T, C = FreshserviceClient> {
    transport: C,
    _payload: PhantomData<fn() -> T>,
}

impl<T, C: Clone> Clone for CustomObjectRecordClient<T, C> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for CustomObjectRecordClient<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomObjectRecordClient")
            .field("transport", &self.transport)
            .finish()
    }
}

impl<T, C> CustomObjectRecordClient<T, C>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    C: Transport,
{
    /// Create a record client over the given transport.
    pub fn new(transport: C) -> Self {
        Self {
            transport,
            _payload: PhantomData,
        }
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &C {
        &self.transport
    }

    /// Create a record in a custom object.
    ///
    /// Sends `POST objects/{custom_object_id}/records` with `{"data": T}`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the request fails.
    #[tracing::instrument(skip(self, request))]
    pub async fn create(
        &self,
        custom_object_id: u64,
        request: CreateCustomObjectRecordRequest<T>,
    ) -> Result<CreateCustomObjectRecordResponse<T>> {
        let path = records_path(custom_object_id);
        self.transport.post(&path, &request).await
    }

    /// List records of a custom object (single page).
    ///
    /// A positive `page_size` is sent as the `page_size` query parameter;
    /// zero or negative uses the server's default. Follow
    /// [`ListCustomObjectRecordsResponse::next_page`] for further pages.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn list(
        &self,
        custom_object_id: u64,
        page_size: i64,
    ) -> Result<ListCustomObjectRecordsResponse<T>> {
        let path = list_path(custom_object_id, page_size);
        self.transport.get(&path).await
    }

    /// Update the data of an existing record.
    ///
    /// Sends `PUT objects/{custom_object_id}/records/{record_id}` with
    /// `{"data": T}`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the request fails.
    #[tracing::instrument(skip(self, request))]
    pub async fn update(
        &self,
        custom_object_id: u64,
        record_id: u64,
        request: UpdateCustomObjectRecordRequest<T>,
    ) -> Result<UpdateCustomObjectRecordResponse<T>> {
        let path = record_path(custom_object_id, record_id);
        self.transport.put(&path, &request).await
    }

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the request fails, or
    /// [`FreshserviceError::DeletionFailed`] if it completed without success.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, custom_object_id: u64, record_id: u64) -> Result<()> {
        let path = record_path(custom_object_id, record_id);
        let outcome = self.transport.delete(&path).await?;

        if !outcome.success {
            tracing::warn!(body = %outcome.body, "record deletion was not successful");
            return Err(FreshserviceError::DeletionFailed {
                record_id,
                custom_object_id,
            });
        }
        Ok(())
    }
}
