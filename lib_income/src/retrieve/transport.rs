//! # Transport Seam
//!
//! Endpoint functions never talk to the network directly; they hand a
//! [`Request`] to whatever [`Transport`] the configuration carries. The HTTP
//! implementation lives in `ky_http`; tests substitute a double returning
//! canned [`RawResponse`]s.

use crate::errors::{ErrorInfo, IncomeError};
use crate::retrieve::request::Request;
use async_trait::async_trait;
use serde_json::Value;

/// A response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Body text.
    pub body: String,
}

impl RawResponse {
    /// Response with a status and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with `value` serialised as its body.
    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }

    /// Indicates if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body on success, or turns it into a provider error.
    pub fn interpret(self) -> Result<Value, IncomeError> {
        if self.is_success() {
            Ok(serde_json::from_str(&self.body)?)
        } else {
            Err(IncomeError::Provider {
                status: self.status,
                info: ErrorInfo::from_body(&self.body),
            })
        }
    }
}

/// Capability that dispatches requests and interprets their responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the call. Non-2xx statuses are still `Ok`; only failures to
    /// obtain a response at all are errors here.
    async fn send(&self, request: &Request) -> Result<RawResponse, IncomeError>;

    /// Turns a raw response into a value tree or a provider error.
    fn handle(&self, response: RawResponse) -> Result<Value, IncomeError> {
        response.interpret()
    }
}

/// Decoding helpers available on every transport, boxed or not.
pub trait TransportExt: Transport {
    /// Runs [`Transport::handle`] and applies `decode` to the value tree. On
    /// failure `decode` is never called.
    fn handle_with<T, F>(&self, response: RawResponse, decode: F) -> Result<T, IncomeError>
    where
        F: FnOnce(Value) -> Result<T, IncomeError>,
    {
        decode(self.handle(response)?)
    }
}

impl<X: Transport + ?Sized> TransportExt for X {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(300, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn success_body_becomes_value_tree() {
        let value = json!({"request_id": "abc", "sessions": []});

        assert_eq!(RawResponse::json(200, &value).interpret().unwrap(), value);
    }

    #[test]
    fn success_with_broken_body_is_parse_error() {
        let err = RawResponse::new(200, "{not json").interpret().unwrap_err();

        assert!(matches!(err, IncomeError::Parse(_)));
    }

    #[test]
    fn failure_status_carries_provider_payload() {
        let body = json!({"error_type": "INVALID_INPUT", "error_code": "INVALID_ACCESS_TOKEN", "error_message": "bad token"});
        let err = RawResponse::json(400, &body).interpret().unwrap_err();

        match err {
            IncomeError::Provider { status, info } => {
                assert_eq!(status, 400);
                assert_eq!(info.error_code.as_deref(), Some("INVALID_ACCESS_TOKEN"));
                assert_eq!(info.raw, body.to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
