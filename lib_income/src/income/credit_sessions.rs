//! # Credit Sessions
//!
//! `credit/sessions/get`: the Link sessions a user went through, each with
//! the results of the bank income, Item add and payroll income flows it
//! contained.
//!
//! Typical parameters: `user_token`.

use crate::configs::IncomeConfig;
use crate::decode::{Decodable, SchemaNode};
use crate::errors::IncomeError;
use crate::income::apicall::ApiCall;
use crate::income::Params;
use serde::{Deserialize, Serialize};

/// Endpoint path.
pub const ENDPOINT: &str = "credit/sessions/get";

/// # Credit Sessions Get Response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditSessionsGetResponse {
    /// Sessions, newest first. Empty when the user never opened Link.
    pub sessions: Vec<CreditSession>,
    /// Provider request id.
    pub request_id: Option<String>,
}

/// # Credit Session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditSession {
    /// Link session identifier.
    pub link_session_id: Option<String>,
    /// ISO 8601 start time of the session.
    pub session_start_time: Option<String>,
    /// Outcome of each flow run in the session.
    pub results: CreditSessionResults,
}

/// # Credit Session Results
///
/// Three independent result lists; any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditSessionResults {
    /// Bank income flows.
    pub bank_income_results: Vec<BankIncomeResult>,
    /// Items added.
    pub item_add_results: Vec<ItemAddResult>,
    /// Payroll income flows.
    pub payroll_income_results: Vec<PayrollIncomeResult>,
}

/// Result of a bank income flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankIncomeResult {
    /// e.g. `APPROVED`, `NO_DEPOSITS_FOUND`, `USER_REPORTED_NO_INCOME`.
    pub status: Option<String>,
    /// Item the flow ran against.
    pub item_id: Option<String>,
    /// Institution of that Item.
    pub institution_id: Option<String>,
}

/// Result of adding an Item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemAddResult {
    /// Public token to exchange for an access token.
    pub public_token: Option<String>,
    /// The new Item.
    pub item_id: Option<String>,
    /// Institution of that Item.
    pub institution_id: Option<String>,
}

/// Result of a payroll income flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollIncomeResult {
    /// Number of paystubs retrieved from the payroll provider.
    pub num_paystubs_retrieved: Option<i64>,
    /// Number of W-2 forms retrieved.
    pub num_w2s_retrieved: Option<i64>,
    /// Payroll provider institution.
    pub institution_id: Option<String>,
}

impl Decodable for CreditSessionsGetResponse {
    fn schema() -> SchemaNode {
        SchemaNode::record("CreditSessionsGetResponse")
            .field("sessions", SchemaNode::list_of(CreditSession::schema()))
            .leaf("request_id")
            .into()
    }
}

impl Decodable for CreditSession {
    fn schema() -> SchemaNode {
        SchemaNode::record("CreditSession")
            .leaves(["link_session_id", "session_start_time"])
            .field("results", CreditSessionResults::schema())
            .into()
    }
}

impl Decodable for CreditSessionResults {
    fn schema() -> SchemaNode {
        SchemaNode::record("CreditSessionResults")
            .field("bank_income_results", SchemaNode::list_of(BankIncomeResult::schema()))
            .field("item_add_results", SchemaNode::list_of(ItemAddResult::schema()))
            .field("payroll_income_results", SchemaNode::list_of(PayrollIncomeResult::schema()))
            .into()
    }
}

impl Decodable for BankIncomeResult {
    fn schema() -> SchemaNode {
        SchemaNode::record("BankIncomeResult")
            .leaves(["status", "item_id", "institution_id"])
            .into()
    }
}

impl Decodable for ItemAddResult {
    fn schema() -> SchemaNode {
        SchemaNode::record("ItemAddResult")
            .leaves(["public_token", "item_id", "institution_id"])
            .into()
    }
}

impl Decodable for PayrollIncomeResult {
    fn schema() -> SchemaNode {
        SchemaNode::record("PayrollIncomeResult")
            .leaves(["num_paystubs_retrieved", "num_w2s_retrieved", "institution_id"])
            .into()
    }
}

/// Lists the credit sessions of a user token.
pub async fn get(params: Params, config: Option<&IncomeConfig>) -> Result<CreditSessionsGetResponse, IncomeError> {
    ApiCall::call(ENDPOINT, params, config).await
}
