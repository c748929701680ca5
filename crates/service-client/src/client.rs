use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::address::{self, HEALTH_PATH};
use crate::config::ClientConfig;
use crate::health::HealthCheck;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Service URL cannot be used as a base: {0}")]
    NotABase(String),
    #[error("API returned {status}: {body}")]
    ApiResponse { status: u16, body: String },
}

/// Client helper for a single remote service.
///
/// Holds the service origin and a version prefix, derives the `/health`
/// URL once, and resolves versioned request paths against the origin.
/// Immutable after construction; clones share the underlying
/// [`reqwest::Client`].
#[derive(Clone)]
pub struct ServiceClient {
    inner: reqwest::Client,
    base_url: Url,
    health_url: Url,
    version_prefix: String,
}

impl ServiceClient {
    /// Path of the health endpoint, independent of the version prefix.
    pub const HEALTH_PATH: &'static str = HEALTH_PATH;

    /// Create a client for `address` with the default `/api/v1` prefix.
    ///
    /// Addresses without a scheme are treated as `http://`.
    pub fn new(address: &str) -> Result<Self, ApiError> {
        Self::with_config(address, &ClientConfig::default())
    }

    pub fn with_version_prefix(address: &str, version_prefix: &str) -> Result<Self, ApiError> {
        Self::with_config(address, &ClientConfig::with_version_prefix(version_prefix))
    }

    /// Create a client whose transport is built from `config`'s timeouts.
    pub fn with_config(address: &str, config: &ClientConfig) -> Result<Self, ApiError> {
        let inner = config.build_http_client()?;
        Self::with_client(address, config, inner)
    }

    /// Create a client on top of an existing [`reqwest::Client`].
    ///
    /// Only `config.version_prefix` is used; transport settings are whatever
    /// `inner` was built with.
    pub fn with_client(
        address: &str,
        config: &ClientConfig,
        inner: reqwest::Client,
    ) -> Result<Self, ApiError> {
        let base_url = address::parse_base(address)?;
        let health_url = address::resolve(&base_url, HEALTH_PATH)?;
        debug!(base_url = %base_url, health_url = %health_url, "created service client");

        Ok(Self {
            inner,
            base_url,
            health_url,
            version_prefix: config.version_prefix.clone(),
        })
    }

    /// GET the health endpoint, returning the response on a 2xx status and
    /// the transport or status error unchanged otherwise.
    pub async fn assert_available(&self) -> Result<reqwest::Response, ApiError> {
        self.probe().await
    }

    /// Resolve `{version_prefix}/{path}` against the service origin.
    ///
    /// A missing leading `/` on `path` is added. Any path already present in
    /// the base address is discarded.
    pub fn request_url(&self, path: &str) -> Result<Url, ApiError> {
        address::resolve(
            &self.base_url,
            &address::versioned_path(&self.version_prefix, path),
        )
    }

    /// String form of [`request_url`](Self::request_url).
    pub fn build_request_url(&self, path: &str) -> Result<String, ApiError> {
        self.request_url(path).map(String::from)
    }

    /// GET `{origin}{version_prefix}/{path}` and deserialize the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.request_url(path)?;
        let resp = self.inner.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// POST `{origin}{version_prefix}/{path}` with a JSON body and deserialize the response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.request_url(path)?;
        let resp = self.inner.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    /// PUT `{origin}{version_prefix}/{path}` with a JSON body and deserialize the response.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.request_url(path)?;
        let resp = self.inner.put(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    /// DELETE `{origin}{version_prefix}/{path}`.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.request_url(path)?;
        let resp = self.inner.delete(url).send().await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    pub fn version_prefix(&self) -> &str {
        &self.version_prefix
    }

    /// Return a reference to the underlying [`reqwest::Client`].
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::ApiResponse { status, body });
        }
        Ok(resp)
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }
}

impl HealthCheck for ServiceClient {
    async fn probe(&self) -> Result<reqwest::Response, ApiError> {
        let resp = self.inner.get(self.health_url.clone()).send().await?;
        debug!(url = %self.health_url, status = resp.status().as_u16(), "health probe answered");
        Self::check_status(resp).await
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("base_url", &self.base_url.as_str())
            .field("health_url", &self.health_url.as_str())
            .field("version_prefix", &self.version_prefix)
            .finish()
    }
}
