/*
[INPUT]:  HTTP configuration (base URL, optional timeouts) and request signer
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::http::{RequestSigner, Result, SlError};

/// Base URL for the Bittrex v3 API
pub const DEFAULT_BASE_URL: &str = "https://api.bittrex.com";

/// HTTP client configuration.
///
/// Timeouts left as `None` fall back to reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

/// Main HTTP client for the Bittrex v3 API
#[derive(Debug, Clone)]
pub struct BittrexClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
}

impl BittrexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SlError::Config(format!(
                "API base URL {} cannot carry a path",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            signer: RequestSigner::default(),
        })
    }

    /// Replace the request signer (e.g. to inject a fixed clock)
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Build full URL from path segments, percent-encoding each one
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SlError::Config(format!("API base URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    /// Send a request and decode a JSON body.
    ///
    /// Any non-success status is returned as [`SlError::Http`] with the
    /// response body verbatim.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let (url, body) = self.send_text(builder).await?;
        serde_json::from_str(&body).map_err(|err| {
            SlError::InvalidResponse(format!("unexpected response from {url}: {err}: {body}"))
        })
    }

    /// Send a request and return the success body as text, undecoded
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<(Url, String)> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(SlError::http_error(status, body));
        }
        Ok((url, body))
    }
}
