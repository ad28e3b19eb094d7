use mock_server::Scenario;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let scenario = match std::env::var("MOCK_SCENARIO") {
        Ok(name) => name
            .parse::<Scenario>()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?,
        Err(_) => Scenario::Healthy,
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr} ({scenario:?})");
    mock_server::run_with(listener, mock_server::app_with(scenario, mock_server::seed_transactions())).await
}
