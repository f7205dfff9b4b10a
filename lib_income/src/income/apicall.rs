//! # Endpoint Call Wiring
//!
//! Every endpoint function is the same composition:
//!
//! 1. build a POST [`Request`] from the caller's parameters and the
//!    configured metadata,
//! 2. hand it to the configured [`Transport`] (or the default one),
//! 3. interpret the response and, on success only, decode it against the
//!    response model's schema.
//!
//! Nothing here retries; a provider error comes back to the caller as is.

use crate::configs::{default_config, IncomeConfig};
use crate::decode::{decode_typed, Decodable};
use crate::errors::IncomeError;
use crate::income::Params;
use crate::retrieve::default_transport;
use crate::retrieve::request::Request;
use crate::retrieve::transport::{Transport, TransportExt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Wiring shared by all endpoint functions.
pub struct ApiCall;

impl ApiCall {
    /// Performs one call to `endpoint` and decodes the response into `T`.
    ///
    /// # Arguments
    /// * `endpoint` - Path relative to the environment base URL.
    /// * `params` - Request body, sent as is.
    /// * `config` - Transport and metadata; `None` uses [`default_config`].
    pub async fn call<T: Decodable>(
        endpoint: &str,
        params: Params,
        config: Option<&IncomeConfig>,
    ) -> Result<T, IncomeError> {
        let config = match config {
            Some(config) => config,
            None => default_config(),
        };
        let transport = Self::transport(config)?;

        let request = Request::post(endpoint, params, config.metadata.clone());
        debug!(endpoint, "sending request");

        let response = transport.send(&request).await?;
        let status = response.status;

        transport
            .handle_with(response, |value| decode_typed::<T>(&value))
            .inspect(|_| debug!(endpoint, status, "response decoded"))
            .inspect_err(|e| match e {
                IncomeError::Provider { status, info } => warn!(
                    endpoint,
                    status,
                    error_type = info.error_type.as_deref().unwrap_or(""),
                    error_code = info.error_code.as_deref().unwrap_or(""),
                    "provider rejected request"
                ),
                other => warn!(endpoint, status, error = %other, "response could not be decoded"),
            })
    }

    fn transport(config: &IncomeConfig) -> Result<Arc<dyn Transport>, IncomeError> {
        match &config.client {
            Some(client) => Ok(Arc::clone(client)),
            None => default_transport().ok_or(IncomeError::NoTransport),
        }
    }
}
