//! Client core for the expenses table.
//!
//! # Overview
//! Fetches one page of transactions from the transactions API, validates the
//! response shape, and renders the result as an HTML table with formatted
//! dates, amounts and categories.
//!
//! # Design
//! - Host-does-IO: `ExpensesClient` builds `HttpRequest` values and parses
//!   `HttpResponse` values; a `Transport` supplied by the caller does the
//!   network round-trip.
//! - `load_expenses` is the async entry point. `ExpensesTable::mount` ties one
//!   call of it to a `FetchState` container and guards against updating a
//!   component that has been dropped.
//! - Formatting and rendering are pure functions over plain data.

pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod loader;
pub mod render;
pub mod state;
pub mod types;

pub use client::{ExpensesClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorKind, FormatError};
pub use format::{capitalise_words, format_amount, format_amount_str, format_date};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use loader::{load_expenses, load_page, Transport};
pub use render::{render, render_document};
pub use state::{ExpensesTable, FetchState};
pub use types::{Amount, NextPage, Transaction, TransactionPage};
