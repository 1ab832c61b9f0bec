//! Freshservice API client.
//!
//! Low-level HTTP client that handles authentication and raw requests. It is
//! the default [`Transport`] used by the record client.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{FreshserviceError, Result};
use crate::traits::{DeleteOutcome, Transport};

const USER_AGENT: &str = concat!("freshservice/", env!("CARGO_PKG_VERSION"));

/// Freshservice accepts any password alongside an API key; `X` is the
/// documented convention.
const API_KEY_PASSWORD: &str = "X";

/// Build the API base URL for a Freshservice domain.
///
/// `acme` becomes `https://acme.freshservice.com/api/v2/`. A fully qualified
/// host such as `acme.freshservice.com` is also accepted.
pub fn api_url_for_domain(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.contains('.') {
        format!("https://{domain}/api/v2/")
    } else {
        format!("https://{domain}.freshservice.com/api/v2/")
    }
}

/// Low-level Freshservice API client.
///
/// Handles authentication and HTTP requests. Record operations live on
/// [`CustomObjectRecordClient`](crate::CustomObjectRecordClient), which drives
/// this client through the [`Transport`] trait.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use freshservice::FreshserviceClient;
///
/// # fn example() -> freshservice::Result<()> {
/// // Create from environment variables
/// let client = FreshserviceClient::from_env()?;
///
/// // Or configure manually
/// let client = FreshserviceClient::new("your-api-key", "https://acme.freshservice.com/api/v2")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FreshserviceClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for FreshserviceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreshserviceClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FreshserviceClient {
    /// Create a client from environment variables.
    ///
    /// Uses `FRESHSERVICE_API_KEY` for authentication. The base URL comes from
    /// `FRESHSERVICE_API_URL`, or failing that is derived from
    /// `FRESHSERVICE_DOMAIN`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key or both location variables are unset.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("FRESHSERVICE_API_KEY").map_err(|_| {
            FreshserviceError::ConfigMissing(
                "FRESHSERVICE_API_KEY environment variable not set".to_string(),
            )
        })?;

        let base_url = match env::var("FRESHSERVICE_API_URL") {
            Ok(url) => url,
            Err(_) => {
                let domain = env::var("FRESHSERVICE_DOMAIN").map_err(|_| {
                    FreshserviceError::ConfigMissing(
                        "FRESHSERVICE_API_URL or FRESHSERVICE_DOMAIN environment variable not set"
                            .to_string(),
                    )
                })?;
                api_url_for_domain(&domain)
            }
        };

        Self::new(&api_key, &base_url)
    }

    /// Create a new client with the provided API key and base URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Freshservice API key
    /// * `base_url` - Base URL for the API (e.g., `https://acme.freshservice.com/api/v2`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .redirect(redirect::Policy::none())
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(FreshserviceError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        Err(Self::status_error(response).await)
    }

    /// Build the error for a 4xx/5xx response.
    async fn status_error(response: Response) -> FreshserviceError {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return FreshserviceError::RateLimited {
                retry_after_secs: retry_after,
            };
        }

        let message = Self::extract_error_message(response, status).await;
        FreshserviceError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        }
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Freshservice uses either {"message": ..} or {"description": .., "errors": [..]}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            for key in ["message", "description", "error"] {
                if let Some(msg) = json.get(key).and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

#[async_trait]
impl Transport for FreshserviceClient {
    #[tracing::instrument(skip(self))]
    async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned + Send,
    {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.api_key, Some(API_KEY_PASSWORD))
            .send()
            .await
            .map_err(FreshserviceError::HttpError)?;

        let response = Self::check_response(response).await?;
        response.json().await.map_err(FreshserviceError::HttpError)
    }

    #[tracing::instrument(skip(self, body))]
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send,
    {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .basic_auth(&self.api_key, Some(API_KEY_PASSWORD))
            .json(body)
            .send()
            .await
            .map_err(FreshserviceError::HttpError)?;

        let response = Self::check_response(response).await?;
        response.json().await.map_err(FreshserviceError::HttpError)
    }

    #[tracing::instrument(skip(self, body))]
    async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Send,
    {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .put(url)
            .basic_auth(&self.api_key, Some(API_KEY_PASSWORD))
            .json(body)
            .send()
            .await
            .map_err(FreshserviceError::HttpError)?;

        let response = Self::check_response(response).await?;
        response.json().await.map_err(FreshserviceError::HttpError)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, path: &str) -> Result<DeleteOutcome> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .delete(url)
            .basic_auth(&self.api_key, Some(API_KEY_PASSWORD))
            .send()
            .await
            .map_err(FreshserviceError::HttpError)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(Self::status_error(response).await);
        }

        let body = response.text().await.map_err(FreshserviceError::HttpError)?;
        Ok(DeleteOutcome {
            success: status.is_success(),
            body,
        })
    }
}
