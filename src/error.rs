//! Error types for Freshservice API operations.

use thiserror::Error;

/// Errors that can occur during Freshservice API operations.
#[derive(Debug, Error)]
pub enum FreshserviceError {
    /// Configuration is missing or incomplete.
    #[error("Freshservice configuration required: {0}")]
    ConfigMissing(String),

    /// A caller-supplied argument could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// API request failed.
    #[error("Freshservice API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    /// The delete request completed but the server did not report success.
    #[error(
        "failed to delete custom object record: {record_id} in custom object: {custom_object_id}"
    )]
    DeletionFailed {
        record_id: u64,
        custom_object_id: u64,
    },
}

impl FreshserviceError {
    /// Returns true if the error was raised by the HTTP transport rather than
    /// synthesized by the record client.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. }
                | Self::HttpError(_)
                | Self::ParseError(_)
                | Self::UrlError(_)
                | Self::RateLimited { .. }
        )
    }
}

/// Result type alias for Freshservice operations.
pub type Result<T> = core::result::Result<T, FreshserviceError>;
