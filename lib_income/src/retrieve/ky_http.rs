//! # HTTP Transport
//!
//! The default [`Transport`]: a `reqwest` client wrapped in
//! `reqwest_middleware` with an exponential backoff retry policy for
//! transient failures. Retrying is this layer's business only; endpoint
//! functions above it never retry.

use crate::configs::Environment;
use crate::errors::IncomeError;
use crate::retrieve::request::Request;
use crate::retrieve::transport::{RawResponse, Transport};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use tracing::{debug, error};
use url::Url;

const MAX_RETRIES: u32 = 3;

/// A flexible asynchronous HTTP transport.
///
/// Joins every request's endpoint onto `base_url`, sends metadata entries as
/// headers and the body as JSON.
pub struct HttpTransport {
    /// The underlying middleware-enabled client.
    inner: ClientWithMiddleware,
    /// The base URL to which all relative endpoints are joined.
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport with the retry policy installed.
    ///
    /// # Arguments
    /// * `base_url` - Absolute base URL, e.g. `https://sandbox.plaid.com/`.
    ///
    /// # Errors
    /// Returns `IncomeError::InvalidBaseUrl` if `base_url` is not absolute.
    pub fn new(base_url: &str) -> Result<Self, IncomeError> {
        let url = Url::parse(base_url).map_err(|e| IncomeError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES);

        let client = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            inner: client,
            base_url: url,
        })
    }

    /// Transport targeting one of the provider's environments.
    pub fn for_environment(environment: Environment) -> Result<Self, IncomeError> {
        Self::new(environment.base_url())
    }

    /// The base URL requests are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `request`.
    pub fn url_for(&self, request: &Request) -> Result<Url, IncomeError> {
        self.base_url
            .join(request.endpoint.trim_start_matches('/'))
            .map_err(|e| IncomeError::InvalidBaseUrl(format!("{}{}: {}", self.base_url, request.endpoint, e)))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<RawResponse, IncomeError> {
        let full_url = self.url_for(request)?;
        let json_body = serde_json::to_string(&request.body)?;

        let mut req = self
            .inner
            .request(request.method.clone(), full_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, concat!("lib_income/", env!("CARGO_PKG_VERSION")))
            .body(json_body);

        for (name, value) in &request.metadata {
            req = req.header(name.as_str(), value.as_str());
        }

        debug!(url = %full_url, method = %request.method, "dispatching request");

        let response = req.send().await.map_err(|e| {
            error!(url = %full_url, error = %e, "request failed before a response arrived");
            IncomeError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| IncomeError::Transport(e.to_string()))?;

        debug!(url = %full_url, status, bytes = body.len(), "response received");
        Ok(RawResponse::new(status, body))
    }
}
