//! Stateless request builder and response parser for the transactions API.
//!
//! # Design
//! `ExpensesClient` holds only a `base_url`. Loading a page is split into
//! `build_list_transactions`, which produces an `HttpRequest`, and
//! `parse_*`, which consumes the `HttpResponse`. The caller executes the
//! round-trip in between, so everything here is deterministic.
//!
//! Validation runs in a fixed order: status, JSON syntax, presence of a
//! `transactions` array, then each transaction. Pagination fields are read
//! leniently; a malformed `next` does not fail the page.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NextPage, Transaction, TransactionPage};

/// Public deployment of the transactions API.
pub const DEFAULT_BASE_URL: &str = "https://tip-transactions.vercel.app";

/// Synchronous, stateless client for the transactions API.
#[derive(Debug, Clone)]
pub struct ExpensesClient {
    base_url: String,
}

impl Default for ExpensesClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ExpensesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_transactions(&self, page: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/transactions?page={page}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Parse a full page, pagination fields included.
    pub fn parse_transaction_page(&self, response: HttpResponse) -> Result<TransactionPage, ApiError> {
        check_status(&response)?;

        let body: Value =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

        let Some(Value::Array(items)) = body.get("transactions") else {
            log::warn!("response from {} has no transactions array", self.base_url);
            return Err(ApiError::InvalidShape);
        };

        let transactions = items
            .iter()
            .cloned()
            .map(serde_json::from_value::<Transaction>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        Ok(TransactionPage {
            current_page: read_u32(&body, "currentPage"),
            next: body.get("next").and_then(|next| {
                Some(NextPage {
                    page: read_u32(next, "page")?,
                    limit: read_u32(next, "limit")?,
                })
            }),
            total_pages: read_u32(&body, "totalPages"),
            transactions,
        })
    }

    /// Parse a page and keep only its transactions.
    pub fn parse_list_transactions(&self, response: HttpResponse) -> Result<Vec<Transaction>, ApiError> {
        self.parse_transaction_page(response).map(|page| page.transactions)
    }
}

/// Any non-2xx status is a fetch failure; the body is only logged.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    log::warn!("transactions request failed with HTTP {}", response.status);
    log::debug!("error body: {}", response.body);
    Err(ApiError::FetchFailed {
        status: response.status,
    })
}

fn read_u32(value: &Value, key: &str) -> Option<u32> {
    value.get(key)?.as_u64().and_then(|n| u32::try_from(n).ok())
}
