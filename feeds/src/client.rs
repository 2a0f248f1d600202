//! HTTP resource client for the analysis service.
//!
//! DESIGN
//! ======
//! One thin wrapper serves both kinds: `ResourceApi<R>` is implemented for
//! every `R: Resource`, with the kind's paths coming from `R::KIND`. The
//! client holds no state beyond the connection pool.
//!
//! The trait is the seam the controller is written against, so tests can
//! swap the network for an in-memory fake. Response classification lives in
//! pure functions (`decode`, `crate::error::classify_rejection`).

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::SyncConfig;
use crate::error::{ApiError, NetworkError, classify_rejection};
use crate::kind::Resource;
use crate::records::RecordId;

/// Request/response operations against one resource collection.
#[async_trait::async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    /// Fetch the whole collection in service order.
    ///
    /// # Errors
    ///
    /// Any failure is a [`ApiError::Network`].
    async fn list(&self) -> Result<Vec<R::Record>, ApiError>;

    /// Submit a draft and return the created record.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when the service explains the rejection,
    /// [`ApiError::Network`] otherwise.
    async fn create(&self, draft: &R::Draft) -> Result<R::Record, ApiError>;

    /// Delete the record with `id`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error for any non-success outcome.
    async fn delete(&self, id: RecordId) -> Result<(), ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

#[derive(Clone, Debug)]
pub struct HttpResourceClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpResourceClient {
    /// Build a client with the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &SyncConfig) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| NetworkError::Transport(format!("http client build failed: {e}")))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call the service health endpoint and return its message.
    ///
    /// # Errors
    ///
    /// Returns a network error if the service is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct Health {
            message: String,
        }

        let (status, text) = self.send(self.http.get(self.url("/"))).await?;
        if !is_success(status) {
            return Err(NetworkError::Status { status, body: text }.into());
        }
        decode::<Health>(&text).map(|health| health.message)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl<R: Resource> ResourceApi<R> for HttpResourceClient {
    async fn list(&self) -> Result<Vec<R::Record>, ApiError> {
        let path = R::KIND.collection_path();
        debug!(kind = %R::KIND, "listing collection");
        let (status, text) = self.send(self.http.get(self.url(path))).await?;
        if !is_success(status) {
            warn!(kind = %R::KIND, status, "list rejected");
            return Err(NetworkError::Status { status, body: text }.into());
        }
        decode(&text)
    }

    async fn create(&self, draft: &R::Draft) -> Result<R::Record, ApiError> {
        let path = R::KIND.collection_path();
        debug!(kind = %R::KIND, "submitting create");
        let (status, text) = self.send(self.http.post(self.url(path)).json(draft)).await?;
        if !is_success(status) {
            warn!(kind = %R::KIND, status, "create rejected");
            return Err(classify_rejection(status, &text));
        }
        decode(&text)
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        let path = R::KIND.item_path(id);
        debug!(kind = %R::KIND, id, "submitting delete");
        let (status, text) = self.send(self.http.delete(self.url(&path))).await?;
        if !is_success(status) {
            warn!(kind = %R::KIND, id, status, "delete rejected");
            return Err(classify_rejection(status, &text));
        }
        Ok(())
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| NetworkError::Decode(e.to_string()).into())
}
