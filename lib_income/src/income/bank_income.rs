//! # Bank Income
//!
//! `credit/bank_income/get`: income derived from the transaction history of
//! the accounts a user linked.
//!
//! Typical parameters: `user_token`, `options.count`.

use crate::configs::IncomeConfig;
use crate::decode::{Decodable, SchemaNode};
use crate::errors::IncomeError;
use crate::income::apicall::ApiCall;
use crate::income::Params;
use serde::{Deserialize, Serialize};

/// Endpoint path.
pub const ENDPOINT: &str = "credit/bank_income/get";

/// # Bank Income Get Response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankIncomeGetResponse {
    /// One report per bank income check, newest first.
    pub bank_income: Vec<BankIncome>,
    /// Provider request id.
    pub request_id: Option<String>,
}

/// # Bank Income
///
/// One bank income report. `bank_income_summary` is always present after
/// decoding; when the provider sent `null` every field in it is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankIncome {
    /// Report identifier.
    pub bank_income_id: Option<String>,
    /// ISO 8601 time the report was generated.
    pub generated_time: Option<String>,
    /// Days of transaction history requested.
    pub days_requested: Option<i64>,
    /// Per-Item breakdown.
    pub items: Vec<BankIncomeItem>,
    /// Totals over the whole report.
    pub bank_income_summary: BankIncomeSummary,
}

/// # Bank Income Item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankIncomeItem {
    /// Item identifier.
    pub item_id: Option<String>,
    /// Institution identifier.
    pub institution_id: Option<String>,
    /// Institution display name.
    pub institution_name: Option<String>,
    /// ISO 8601 time the Item's data was last refreshed.
    pub last_updated_time: Option<String>,
    /// Income sources detected on this Item's accounts.
    pub bank_income_sources: Vec<BankIncomeSource>,
}

/// # Bank Income Source
///
/// A recurring deposit pattern recognised as income.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankIncomeSource {
    /// Source identifier.
    pub income_source_id: Option<String>,
    /// Description as it appears on the transactions.
    pub income_description: Option<String>,
    /// e.g. `SALARY`, `GIG_ECONOMY`, `RENTAL`.
    pub income_category: Option<String>,
    /// Account the deposits landed in.
    pub account_id: Option<String>,
    /// `YYYY-MM-DD` of the first deposit.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD` of the last deposit.
    pub end_date: Option<String>,
    /// e.g. `WEEKLY`, `BIWEEKLY`, `MONTHLY`.
    pub pay_frequency: Option<String>,
    /// Sum of the deposits.
    pub total_amount: Option<f64>,
    /// Number of deposits.
    pub transaction_count: Option<i64>,
}

/// # Bank Income Summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankIncomeSummary {
    /// Total income over the report window.
    pub total_amount: Option<f64>,
    /// ISO 4217 currency code; `None` when `unofficial_currency_code` is set.
    pub iso_currency_code: Option<String>,
    /// Non-ISO currency code, e.g. for cryptocurrencies.
    pub unofficial_currency_code: Option<String>,
    /// `YYYY-MM-DD` start of the report window.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD` end of the report window.
    pub end_date: Option<String>,
    /// Number of distinct income sources.
    pub income_sources_count: Option<i64>,
    /// Number of distinct income categories.
    pub income_categories_count: Option<i64>,
    /// Number of income transactions.
    pub income_transactions_count: Option<i64>,
}

impl Decodable for BankIncomeGetResponse {
    fn schema() -> SchemaNode {
        SchemaNode::record("BankIncomeGetResponse")
            .field("bank_income", SchemaNode::list_of(BankIncome::schema()))
            .leaf("request_id")
            .into()
    }
}

impl Decodable for BankIncome {
    fn schema() -> SchemaNode {
        SchemaNode::record("BankIncome")
            .leaves(["bank_income_id", "generated_time", "days_requested"])
            .field("items", SchemaNode::list_of(BankIncomeItem::schema()))
            .field("bank_income_summary", BankIncomeSummary::schema())
            .into()
    }
}

impl Decodable for BankIncomeItem {
    fn schema() -> SchemaNode {
        SchemaNode::record("BankIncomeItem")
            .leaves(["item_id", "institution_id", "institution_name", "last_updated_time"])
            .field("bank_income_sources", SchemaNode::list_of(BankIncomeSource::schema()))
            .into()
    }
}

impl Decodable for BankIncomeSource {
    fn schema() -> SchemaNode {
        SchemaNode::record("BankIncomeSource")
            .leaves([
                "income_source_id",
                "income_description",
                "income_category",
                "account_id",
                "start_date",
                "end_date",
                "pay_frequency",
                "total_amount",
                "transaction_count",
            ])
            .into()
    }
}

impl Decodable for BankIncomeSummary {
    fn schema() -> SchemaNode {
        SchemaNode::record("BankIncomeSummary")
            .leaves([
                "total_amount",
                "iso_currency_code",
                "unofficial_currency_code",
                "start_date",
                "end_date",
                "income_sources_count",
                "income_categories_count",
                "income_transactions_count",
            ])
            .into()
    }
}

/// Fetches bank income reports for a user token.
pub async fn get(params: Params, config: Option<&IncomeConfig>) -> Result<BankIncomeGetResponse, IncomeError> {
    ApiCall::call(ENDPOINT, params, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_typed;
    use serde_json::json;

    #[test]
    fn decodes_nested_items_and_sources() {
        let payload = json!({
            "bank_income": [{
                "bank_income_id": "dacc92a1-6e2b-4a2d-9b4c-1e5a1c1c0a10",
                "generated_time": "2022-01-31T22:47:53Z",
                "days_requested": 90,
                "items": [{
                    "item_id": "item-1",
                    "institution_id": "ins_0",
                    "institution_name": "Plaid Bank",
                    "last_updated_time": "2022-01-31T22:47:53Z",
                    "bank_income_sources": [
                        {"income_source_id": "src-1", "income_category": "SALARY", "pay_frequency": "MONTHLY", "total_amount": 300, "transaction_count": 1},
                        {"income_source_id": "src-2", "income_category": "GIG_ECONOMY", "total_amount": 120.5}
                    ]
                }],
                "bank_income_summary": {
                    "total_amount": 420.5,
                    "iso_currency_code": "USD",
                    "unofficial_currency_code": null,
                    "start_date": "2021-11-15",
                    "end_date": "2022-01-15",
                    "income_sources_count": 2
                }
            }],
            "request_id": "LhQf0THi8SH1yJm"
        });

        let response: BankIncomeGetResponse = decode_typed(&payload).unwrap();

        let report = &response.bank_income[0];
        assert_eq!(report.days_requested, Some(90));
        assert_eq!(report.items[0].bank_income_sources.len(), 2);
        assert_eq!(report.items[0].bank_income_sources[1].pay_frequency, None);
        assert_eq!(report.bank_income_summary.total_amount, Some(420.5));
        assert_eq!(report.bank_income_summary.iso_currency_code.as_deref(), Some("USD"));
        assert_eq!(report.bank_income_summary.start_date.as_deref(), Some("2021-11-15"));
        assert_eq!(report.bank_income_summary.income_transactions_count, None);
    }
}
