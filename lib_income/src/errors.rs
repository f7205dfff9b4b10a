//! # Error Types
//!
//! Every public operation returns `Result<T, IncomeError>`. Provider-side
//! failures carry the provider's own error payload as an [`ErrorInfo`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error details reported by the provider in a non-2xx response body.
///
/// Every field is optional because the provider does not guarantee the
/// payload shape on gateway or proxy failures. `raw` keeps the untouched body
/// text so nothing is lost when the body is not JSON at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Broad category, e.g. `INVALID_REQUEST` or `ITEM_ERROR`.
    #[serde(default)]
    pub error_type: Option<String>,
    /// Specific code, e.g. `INVALID_ACCESS_TOKEN`.
    #[serde(default)]
    pub error_code: Option<String>,
    /// Developer-facing message.
    #[serde(default)]
    pub error_message: Option<String>,
    /// End-user-facing message, often `null`.
    #[serde(default)]
    pub display_message: Option<String>,
    /// Provider request id, useful when contacting support.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Link to the provider's documentation for this error.
    #[serde(default)]
    pub documentation_url: Option<String>,
    /// Provider hint on how to recover.
    #[serde(default)]
    pub suggested_action: Option<String>,
    /// The response body exactly as received.
    #[serde(skip)]
    pub raw: String,
}

impl ErrorInfo {
    /// Parses a provider error body. A body that is not a JSON object still
    /// yields an `ErrorInfo`, with only `raw` populated.
    pub fn from_body(body: &str) -> Self {
        let mut info = serde_json::from_str::<ErrorInfo>(body).unwrap_or_default();
        info.raw = body.to_string();
        info
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error_code, &self.error_message) {
            (Some(code), Some(message)) => write!(f, "{}: {}", code, message),
            (Some(code), None) => write!(f, "{}", code),
            (None, Some(message)) => write!(f, "{}", message),
            (None, None) if self.raw.is_empty() => write!(f, "no error details"),
            (None, None) => write!(f, "{}", self.raw),
        }
    }
}

/// Errors surfaced by endpoint calls.
#[derive(Debug, Error)]
pub enum IncomeError {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {info}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Parsed provider error payload.
        info: ErrorInfo,
    },

    /// A success response whose body is not valid JSON.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The decoded graph could not be projected onto the typed model, which
    /// only happens when a leaf value has the wrong primitive type.
    #[error("cannot project decoded {type_name} onto its model: {source}")]
    Projection {
        /// Name of the record type being projected.
        type_name: String,
        /// Underlying serde error.
        source: serde_json::Error,
    },

    /// The configured base URL or endpoint path cannot form a URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// No client was configured and no default transport is compiled in.
    #[error("no transport configured")]
    NoTransport,
}

impl IncomeError {
    /// Provider error payload, when the failure came from the provider.
    pub fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            IncomeError::Provider { info, .. } => Some(info),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_payload_and_keeps_raw_body() {
        let body = r#"{"error_type":"ITEM_ERROR","error_code":"ITEM_LOGIN_REQUIRED","error_message":"login required","display_message":null,"request_id":"req-1"}"#;
        let info = ErrorInfo::from_body(body);

        assert_eq!(info.error_type.as_deref(), Some("ITEM_ERROR"));
        assert_eq!(info.error_code.as_deref(), Some("ITEM_LOGIN_REQUIRED"));
        assert_eq!(info.display_message, None);
        assert_eq!(info.raw, body);
        assert_eq!(info.to_string(), "ITEM_LOGIN_REQUIRED: login required");
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let info = ErrorInfo::from_body("<html>502 Bad Gateway</html>");

        assert_eq!(info.error_code, None);
        assert_eq!(info.to_string(), "<html>502 Bad Gateway</html>");
    }

    #[test]
    fn provider_error_exposes_info() {
        let err = IncomeError::Provider { status: 400, info: ErrorInfo::from_body("") };

        assert!(err.error_info().is_some());
        assert!(IncomeError::NoTransport.error_info().is_none());
        assert_eq!(err.to_string(), "provider returned HTTP 400: no error details");
    }
}
