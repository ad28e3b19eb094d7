use std::{str::FromStr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub date: String,
    /// String or number, as the real API mixes both.
    pub amount: Value,
    pub merchant: String,
    pub category: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextPage {
    pub page: u32,
    pub limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub current_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NextPage>,
    pub total_pages: u32,
    pub transactions: Vec<Transaction>,
}

/// How the server answers `/api/transactions`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scenario {
    #[default]
    Healthy,
    /// 500 with a plain-text body.
    ServerError,
    /// 200 with pagination fields but no `transactions`.
    MissingTransactions,
    /// 200 where `transactions` is an object.
    TransactionsNotArray,
    /// 200 with a body that is not JSON.
    MalformedJson,
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Scenario::Healthy),
            "server-error" => Ok(Scenario::ServerError),
            "missing-transactions" => Ok(Scenario::MissingTransactions),
            "transactions-not-array" => Ok(Scenario::TransactionsNotArray),
            "malformed-json" => Ok(Scenario::MalformedJson),
            other => Err(format!("unknown scenario: {other}")),
        }
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

struct ServerState {
    scenario: Scenario,
    transactions: Vec<Transaction>,
}

type Shared = Arc<ServerState>;

/// Healthy server over the seeded transactions.
pub fn app() -> Router {
    app_with(Scenario::Healthy, seed_transactions())
}

pub fn app_with(scenario: Scenario, transactions: Vec<Transaction>) -> Router {
    let state: Shared = Arc::new(ServerState {
        scenario,
        transactions,
    });
    Router::new()
        .route("/api/transactions", get(list_transactions))
        .with_state(state)
}

pub async fn run_with(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_transactions(State(state): State<Shared>, Query(query): Query<PageQuery>) -> Response {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).max(1);
    log::debug!("GET /api/transactions page={page} limit={limit} scenario={:?}", state.scenario);

    match state.scenario {
        Scenario::Healthy => Json(paginate(&state.transactions, page, limit)).into_response(),
        Scenario::ServerError => (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response(),
        Scenario::MissingTransactions => Json(json!({
            "currentPage": page,
            "next": { "page": page.saturating_add(1), "limit": limit },
            "totalPages": 1,
        }))
        .into_response(),
        Scenario::TransactionsNotArray => Json(json!({
            "currentPage": page,
            "totalPages": 1,
            "transactions": { "id": 1 },
        }))
        .into_response(),
        Scenario::MalformedJson => (StatusCode::OK, "<html>gateway timeout</html>").into_response(),
    }
}

pub fn paginate(all: &[Transaction], page: u32, limit: u32) -> TransactionPage {
    let total_pages = (all.len() as u32).div_ceil(limit).max(1);
    let start = (page - 1).saturating_mul(limit) as usize;
    let transactions = all.iter().skip(start).take(limit as usize).cloned().collect();
    TransactionPage {
        current_page: page,
        next: (page < total_pages).then(|| NextPage { page: page + 1, limit }),
        total_pages,
        transactions,
    }
}

/// Deterministic fixture data with mixed amount types and messy categories.
pub fn seed_transactions() -> Vec<Transaction> {
    const MERCHANTS: [(&str, &str); 6] = [
        ("Tesco", "GROCERY store"),
        ("Transport for London", "travel"),
        ("Pret A Manger", "eating OUT"),
        ("Amazon", "shopping"),
        ("British Gas", "BILLS and utilities"),
        ("Odeon", "entertainment"),
    ];

    (1..=23)
        .map(|i: i64| {
            let (merchant, category) = MERCHANTS[(i as usize - 1) % MERCHANTS.len()];
            let pence = i * 137 % 10_000;
            let amount = if i % 3 == 0 {
                json!(pence / 100)
            } else {
                json!(format!("{}.{:02}", pence / 100, pence % 100))
            };
            Transaction {
                id: i,
                date: format!("2024-03-{:02}T{:02}:{:02}:00Z", (i % 28) + 1, (i * 5) % 24, (i * 7) % 60),
                amount,
                merchant: merchant.to_string(),
                category: category.to_string(),
            }
        })
        .collect()
}
