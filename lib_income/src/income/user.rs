//! # User Token
//!
//! `user/create`: registers an end user and returns the `user_token` the
//! credit endpoints expect.
//!
//! Typical parameters: `client_user_id`.

use crate::configs::IncomeConfig;
use crate::decode::{Decodable, SchemaNode};
use crate::errors::IncomeError;
use crate::income::apicall::ApiCall;
use crate::income::Params;
use serde::{Deserialize, Serialize};

/// Endpoint path.
pub const ENDPOINT: &str = "user/create";

/// # User Create Response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCreateResponse {
    /// Provider request id.
    pub request_id: Option<String>,
    /// Token to pass to the credit endpoints.
    pub user_token: Option<String>,
    /// Provider-side user identifier.
    pub user_id: Option<String>,
}

impl Decodable for UserCreateResponse {
    fn schema() -> SchemaNode {
        SchemaNode::record("UserCreateResponse")
            .leaves(["request_id", "user_token", "user_id"])
            .into()
    }
}

/// Creates a user token.
pub async fn create(params: Params, config: Option<&IncomeConfig>) -> Result<UserCreateResponse, IncomeError> {
    ApiCall::call(ENDPOINT, params, config).await
}
