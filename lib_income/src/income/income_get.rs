//! # Income Data
//!
//! `income/get`: verified income streams for the Item behind an access
//! token.
//!
//! Typical parameters: `access_token`.

use crate::configs::IncomeConfig;
use crate::decode::{Decodable, SchemaNode};
use crate::errors::IncomeError;
use crate::income::apicall::ApiCall;
use crate::income::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoint path.
pub const ENDPOINT: &str = "income/get";

/// # Income Get Response
///
/// Top-level result: the Item the data belongs to, the income summary and
/// the provider's request id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeGetResponse {
    /// The Item the income was computed for.
    pub item: Item,
    /// Income summary with its streams.
    pub income: Income,
    /// Provider request id.
    pub request_id: Option<String>,
}

/// # Item
///
/// A login at one financial institution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Products that may still be added to the Item.
    pub available_products: Vec<String>,
    /// Products already billed for the Item.
    pub billed_products: Vec<String>,
    /// ISO 8601 time at which consent expires, when applicable.
    pub consent_expiration_time: Option<String>,
    /// Item-level error object, `null` when the Item is healthy.
    pub error: Option<Value>,
    /// Institution identifier.
    pub institution_id: Option<String>,
    /// Item identifier.
    pub item_id: Option<String>,
    /// Webhook URL registered for the Item.
    pub webhook: Option<String>,
}

/// # Income
///
/// Aggregate figures plus the individual income streams they are computed
/// from. Monetary amounts are in the account currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// Individual income streams.
    pub income_streams: Vec<IncomeStream>,
    /// Income over the last twelve months.
    pub last_year_income: Option<f64>,
    /// Last twelve months, before tax.
    pub last_year_income_before_tax: Option<f64>,
    /// Projected income over the next twelve months.
    pub projected_yearly_income: Option<f64>,
    /// Projected twelve months, before tax.
    pub projected_yearly_income_before_tax: Option<f64>,
    /// Largest number of streams active at the same time.
    pub max_number_of_overlapping_income_streams: Option<i64>,
    /// Total number of streams.
    pub number_of_income_streams: Option<i64>,
}

/// # Income Stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStream {
    /// Confidence score between 0 and 1.
    pub confidence: Option<f64>,
    /// Days of history the stream was observed over.
    pub days: Option<i64>,
    /// Average monthly income from this stream.
    pub monthly_income: Option<f64>,
    /// Name of the payer.
    pub name: Option<String>,
}

impl Decodable for IncomeGetResponse {
    fn schema() -> SchemaNode {
        SchemaNode::record("IncomeGetResponse")
            .field("item", Item::schema())
            .field("income", Income::schema())
            .leaf("request_id")
            .into()
    }
}

impl Decodable for Item {
    fn schema() -> SchemaNode {
        SchemaNode::record("Item")
            .field("available_products", SchemaNode::list_of(SchemaNode::Leaf))
            .field("billed_products", SchemaNode::list_of(SchemaNode::Leaf))
            .leaves(["consent_expiration_time", "error", "institution_id", "item_id", "webhook"])
            .into()
    }
}

impl Decodable for Income {
    fn schema() -> SchemaNode {
        SchemaNode::record("Income")
            .field("income_streams", SchemaNode::list_of(IncomeStream::schema()))
            .leaves([
                "last_year_income",
                "last_year_income_before_tax",
                "projected_yearly_income",
                "projected_yearly_income_before_tax",
                "max_number_of_overlapping_income_streams",
                "number_of_income_streams",
            ])
            .into()
    }
}

impl Decodable for IncomeStream {
    fn schema() -> SchemaNode {
        SchemaNode::record("IncomeStream")
            .leaves(["confidence", "days", "monthly_income", "name"])
            .into()
    }
}

/// Fetches income data for an access token.
pub async fn get(params: Params, config: Option<&IncomeConfig>) -> Result<IncomeGetResponse, IncomeError> {
    ApiCall::call(ENDPOINT, params, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_typed;
    use serde_json::json;

    #[test]
    fn decodes_full_payload() {
        let payload = json!({
            "item": {
                "available_products": ["balance", "auth"],
                "billed_products": ["income"],
                "error": null,
                "institution_id": "ins_3",
                "item_id": "eVBnVMp7zdTJLkRNr33Rs6zr7KNJqBFL9DrE6",
                "webhook": "https://www.genericwebhookurl.com/webhook"
            },
            "income": {
                "income_streams": [
                    {"confidence": 0.99, "days": 720, "monthly_income": 5000, "name": "PLAID INC"}
                ],
                "last_year_income": 28000,
                "last_year_income_before_tax": 38662,
                "max_number_of_overlapping_income_streams": 1,
                "number_of_income_streams": 1,
                "projected_yearly_income": 60000,
                "projected_yearly_income_before_tax": 84014
            },
            "request_id": "V8VpaR12UJvDrFk"
        });

        let response: IncomeGetResponse = decode_typed(&payload).unwrap();

        assert_eq!(response.item.billed_products, vec!["income".to_string()]);
        assert_eq!(response.item.institution_id.as_deref(), Some("ins_3"));
        assert_eq!(response.item.consent_expiration_time, None);
        assert_eq!(response.income.income_streams.len(), 1);
        assert_eq!(response.income.income_streams[0].days, Some(720));
        assert_eq!(response.income.income_streams[0].monthly_income, Some(5000.0));
        assert_eq!(response.income.projected_yearly_income_before_tax, Some(84014.0));
        assert_eq!(response.request_id.as_deref(), Some("V8VpaR12UJvDrFk"));
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let response: IncomeGetResponse = decode_typed(&json!({})).unwrap();

        assert_eq!(response, IncomeGetResponse::default());
    }
}
