use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, seed_transactions, Scenario, TransactionPage};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- healthy ---

#[tokio::test]
async fn first_page_uses_default_limit() {
    let resp = app().oneshot(get("/api/transactions?page=1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: TransactionPage = body_json(resp).await;
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.transactions.len(), 10);
    assert_eq!(page.transactions[0].id, 1);
    let next = page.next.unwrap();
    assert_eq!((next.page, next.limit), (2, 10));
}

#[tokio::test]
async fn missing_page_defaults_to_first() {
    let resp = app().oneshot(get("/api/transactions")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: TransactionPage = body_json(resp).await;
    assert_eq!(page.current_page, 1);
}

#[tokio::test]
async fn custom_limit_changes_page_count() {
    let resp = app()
        .oneshot(get("/api/transactions?page=2&limit=5"))
        .await
        .unwrap();

    let page: TransactionPage = body_json(resp).await;
    assert_eq!(page.total_pages, 5);
    let ids: Vec<i64> = page.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn custom_dataset_is_served() {
    let mut data = seed_transactions();
    data.truncate(2);
    let resp = app_with(Scenario::Healthy, data.clone())
        .oneshot(get("/api/transactions?page=1"))
        .await
        .unwrap();

    let page: TransactionPage = body_json(resp).await;
    assert_eq!(page.transactions, data);
    assert!(page.next.is_none());
}

#[tokio::test]
async fn bad_page_parameter_returns_400() {
    let resp = app()
        .oneshot(get("/api/transactions?page=abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/api/other")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- failure scenarios ---

#[tokio::test]
async fn server_error_scenario() {
    let resp = app_with(Scenario::ServerError, seed_transactions())
        .oneshot(get("/api/transactions?page=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_bytes(resp).await.as_ref(), b"internal error");
}

#[tokio::test]
async fn missing_transactions_scenario() {
    let resp = app_with(Scenario::MissingTransactions, seed_transactions())
        .oneshot(get("/api/transactions?page=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["currentPage"], 1);
    assert!(body.get("transactions").is_none());
}

#[tokio::test]
async fn transactions_not_array_scenario() {
    let resp = app_with(Scenario::TransactionsNotArray, seed_transactions())
        .oneshot(get("/api/transactions?page=1"))
        .await
        .unwrap();

    let body: Value = body_json(resp).await;
    assert!(body["transactions"].is_object());
}

#[tokio::test]
async fn malformed_json_scenario() {
    let resp = app_with(Scenario::MalformedJson, seed_transactions())
        .oneshot(get("/api/transactions?page=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp).await;
    assert!(serde_json::from_slice::<Value>(&bytes).is_err());
}
