use crate::domain::{ItemId, SellerId};
use crate::telemetry::error_chain_fmt;
use anyhow::Context;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};

/// API generation an endpoint belongs to.
///
/// Both generations serve statistics, with different not-found semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &str {
        match self {
            ApiVersion::V1 => "1",
            ApiVersion::V2 => "2",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.as_str())
    }
}

/// Status and raw body of a response, uninterpreted.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(thiserror::Error)]
pub enum ApiClientError {
    #[error("Failed to execute request against {0}")]
    Transport(String, #[source] reqwest::Error),
    #[error("Failed to read the response body from {0}")]
    Body(String, #[source] reqwest::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Client of the classified-ads API.
///
/// Every operation performs exactly one request and hands back whatever the
/// server answered: status codes are never interpreted and nothing is retried.
/// Only transport failures are reported as errors.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http_client: Client,
}

impl ApiClient {
    /// Without a `timeout` requests wait as long as the transport allows.
    pub fn new(
        base_url: String,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .context("Failed to build the HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    #[tracing::instrument(name = "Creating listing", skip(self, payload))]
    pub async fn create_listing<Payload>(
        &self,
        payload: &Payload,
    ) -> Result<ApiResponse, ApiClientError>
    where
        Payload: serde::Serialize + ?Sized,
    {
        let url = format!("{}/api/1/item", self.base_url);
        self.execute(&url, self.http_client.post(&url).json(payload))
            .await
    }

    #[tracing::instrument(name = "Getting listing", skip(self), fields(item_id = %item_id))]
    pub async fn get_listing(&self, item_id: &ItemId) -> Result<ApiResponse, ApiClientError> {
        let url = format!("{}/api/1/item/{}", self.base_url, item_id);
        self.execute(&url, self.http_client.get(&url)).await
    }

    #[tracing::instrument(name = "Getting seller listings", skip(self), fields(seller_id = %seller_id))]
    pub async fn get_listings_by_seller(
        &self,
        seller_id: SellerId,
    ) -> Result<ApiResponse, ApiClientError> {
        let url = format!("{}/api/1/{}/item", self.base_url, seller_id);
        self.execute(&url, self.http_client.get(&url)).await
    }

    #[tracing::instrument(
        name = "Getting statistics",
        skip(self),
        fields(item_id = %item_id, version = %version)
    )]
    pub async fn get_statistics(
        &self,
        item_id: &ItemId,
        version: ApiVersion,
    ) -> Result<ApiResponse, ApiClientError> {
        let url = format!(
            "{}/api/{}/statistic/{}",
            self.base_url,
            version.as_str(),
            item_id
        );
        self.execute(&url, self.http_client.get(&url)).await
    }

    /// Only the second API generation exposes deletion.
    #[tracing::instrument(name = "Deleting listing", skip(self), fields(item_id = %item_id))]
    pub async fn delete_listing(&self, item_id: &ItemId) -> Result<ApiResponse, ApiClientError> {
        let url = format!(
            "{}/api/{}/item/{}",
            self.base_url,
            ApiVersion::V2.as_str(),
            item_id
        );
        self.execute(&url, self.http_client.delete(&url)).await
    }

    async fn execute(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<ApiResponse, ApiClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {:?}", url, e);
            ApiClientError::Transport(url.to_string(), e)
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiClientError::Body(url.to_string(), e))?;
        tracing::debug!(status = status.as_u16(), "Received response");
        Ok(ApiResponse::new(status, body))
    }
}
