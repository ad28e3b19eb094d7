//! Async entry point for loading one page of expenses.
//!
//! The core never opens a socket. A `Transport` performs the round-trip for a
//! prepared `HttpRequest`; `load_expenses` wraps build, execute and parse
//! into a single call that either yields transactions or a tagged `ApiError`.

use std::future::Future;

use crate::client::ExpensesClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Transaction, TransactionPage};

/// Executes HTTP requests on behalf of the core.
///
/// Implementations must return non-2xx responses as data, not as errors;
/// `Err` is reserved for failures where no response was received.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, String>> + Send;
}

/// Fetch and validate one page, keeping the pagination fields.
pub async fn load_page<T: Transport>(
    client: &ExpensesClient,
    transport: &T,
    page: u32,
) -> Result<TransactionPage, ApiError> {
    let request = client.build_list_transactions(page);
    log::debug!("{} {}", request.method.as_str(), request.url);

    let response = transport.execute(request).await.map_err(|message| {
        log::warn!("transport failure: {message}");
        ApiError::Transport(message)
    })?;

    let parsed = client.parse_transaction_page(response)?;
    log::info!("loaded {} transactions from page {page}", parsed.transactions.len());
    Ok(parsed)
}

/// Fetch and validate one page of transactions.
pub async fn load_expenses<T: Transport>(
    client: &ExpensesClient,
    transport: &T,
    page: u32,
) -> Result<Vec<Transaction>, ApiError> {
    load_page(client, transport, page).await.map(|page| page.transactions)
}
