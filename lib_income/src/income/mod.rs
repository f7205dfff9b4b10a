//! # Income Endpoints
//!
//! One module per provider operation. Each declares its typed response model,
//! the schema template mirroring it, and a thin async function wiring the
//! request through [`apicall::ApiCall`].
//!
//! ## Contained Modules:
//!
//! - **`income_get`**: income streams for an access token.
//! - **`bank_income`**: bank income reports for a user token.
//! - **`credit_sessions`**: Link sessions and their per-flow results.
//! - **`user`**: user token creation.

/// Shared request, dispatch and decode wiring.
pub mod apicall;
/// `credit/bank_income/get`.
pub mod bank_income;
/// `credit/sessions/get`.
pub mod credit_sessions;
/// `income/get`.
pub mod income_get;
/// `user/create`.
pub mod user;

/// Request parameters, sent as the JSON body without modification.
pub type Params = serde_json::Map<String, serde_json::Value>;
