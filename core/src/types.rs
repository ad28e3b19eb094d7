//! Domain DTOs for the transactions API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch schema drift between the two crates.
//!
//! `amount` arrives either as a JSON string or a JSON number. `Amount` keeps
//! whichever form was sent so formatting can pass it through verbatim. Any
//! other JSON value lands in `Amount::Other` and is shown as its JSON text,
//! so one odd amount does not sink the whole page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single expense record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    /// ISO-8601 timestamp as sent by the server.
    pub date: String,
    pub amount: Amount,
    pub merchant: String,
    pub category: String,
}

/// Transaction amount in whichever JSON form the server used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Text(text) => f.write_str(text),
            Amount::Number(number) => write!(f, "{number}"),
            Amount::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Amount::Text(text.to_string())
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(value.into())
    }
}

/// Cursor for the page after the current one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextPage {
    pub page: u32,
    pub limit: u32,
}

/// One page of the `/api/transactions` listing.
///
/// Only `transactions` drives rendering. The pagination fields are decoded
/// when present so callers can inspect them, but nothing follows `next`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub next: Option<NextPage>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    pub transactions: Vec<Transaction>,
}

impl TransactionPage {
    /// `true` when the server advertises a page after this one.
    pub fn has_more(&self) -> bool {
        match (self.current_page, self.total_pages) {
            (Some(current), Some(total)) => current < total,
            _ => self.next.is_some(),
        }
    }
}
