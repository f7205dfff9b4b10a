//! # Request Builder
//!
//! Pure construction of the abstract request handed to a [`Transport`].
//!
//! [`Transport`]: crate::retrieve::transport::Transport

use http::Method;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One outgoing call, built per invocation and consumed by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP verb.
    pub method: Method,
    /// Path relative to the environment base URL, e.g. `income/get`.
    pub endpoint: String,
    /// Caller parameters, sent as the JSON body without modification.
    pub body: Map<String, Value>,
    /// Cross-cutting metadata (credentials, API version), opaque here.
    pub metadata: BTreeMap<String, String>,
}

impl Request {
    /// Assembles a request. Nothing is validated at this layer.
    pub fn build(
        method: Method,
        endpoint: impl Into<String>,
        body: Map<String, Value>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body,
            metadata,
        }
    }

    /// Every covered operation is a POST.
    pub fn post(endpoint: impl Into<String>, body: Map<String, Value>, metadata: BTreeMap<String, String>) -> Self {
        Self::build(Method::POST, endpoint, body, metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_passes_body_and_metadata_through() {
        let mut body = Map::new();
        body.insert("access_token".into(), json!("access-sandbox-1"));
        body.insert("options".into(), json!({"count": 2}));
        let mut metadata = BTreeMap::new();
        metadata.insert("Plaid-Version".to_string(), "2020-09-14".to_string());

        let request = Request::post("income/get", body.clone(), metadata.clone());

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.endpoint, "income/get");
        assert_eq!(request.body, body);
        assert_eq!(request.metadata, metadata);
    }

    #[test]
    fn empty_body_is_allowed() {
        let request = Request::build(Method::POST, "credit/sessions/get", Map::new(), BTreeMap::new());

        assert!(request.body.is_empty());
        assert!(request.metadata.is_empty());
    }
}
