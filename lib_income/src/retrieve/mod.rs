//! # Request Dispatch
//!
//! - **`request`**: the abstract [`Request`](request::Request) value.
//! - **`transport`**: the [`Transport`](transport::Transport) seam and raw
//!   response interpretation.
//! - **`ky_http`** (feature `retrieve`): the reqwest-backed transport with
//!   retry middleware.
//!
//! The process-wide default transport is registered here once, on first use,
//! and never replaced afterwards. Callers wanting anything else pass their
//! own client through [`IncomeConfig`](crate::configs::IncomeConfig).

/// Generic HTTP transport with retry middleware for resilient network requests.
#[cfg(feature = "retrieve")]
pub mod ky_http;
/// Abstract request construction.
pub mod request;
/// The transport capability and raw response handling.
pub mod transport;

use std::sync::Arc;
use transport::Transport;

#[cfg(feature = "retrieve")]
use crate::configs::Environment;
#[cfg(feature = "retrieve")]
use static_init::dynamic;

#[cfg(feature = "retrieve")]
#[dynamic(lazy)]
static DEFAULT_TRANSPORT: Option<Arc<dyn Transport>> = {
    match ky_http::HttpTransport::for_environment(Environment::from_env()) {
        Ok(transport) => Some(Arc::new(transport) as Arc<dyn Transport>),
        Err(e) => {
            tracing::error!(error = %e, "default transport unavailable");
            None
        }
    }
};

/// The statically registered transport, if this build has one.
pub fn default_transport() -> Option<Arc<dyn Transport>> {
    #[cfg(feature = "retrieve")]
    {
        (*DEFAULT_TRANSPORT).clone()
    }
    #[cfg(not(feature = "retrieve"))]
    {
        None
    }
}
