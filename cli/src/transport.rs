//! ureq-backed `Transport` for the CLI.
//!
//! ureq is blocking, so each request runs on tokio's blocking pool. Status
//! codes are returned as data; only connection-level failures are errors.

use expenses_core::{HttpRequest, HttpResponse, Transport};

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, &request))
            .await
            .map_err(|e| e.to_string())?
    }
}

fn execute_blocking(agent: &ureq::Agent, request: &HttpRequest) -> Result<HttpResponse, String> {
    let mut builder = agent.get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let mut response = builder.call().map_err(|e| e.to_string())?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().map_err(|e| e.to_string())?;

    Ok(HttpResponse { status, headers, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use expenses_core::ExpensesClient;
    use mock_server::{app_with, seed_transactions, Scenario};

    async fn serve(scenario: Scenario) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(mock_server::run_with(listener, app_with(scenario, seed_transactions())));
        format!("http://{addr}")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn returns_body_and_status() {
        let base = serve(Scenario::Healthy).await;
        let request = ExpensesClient::new(&base).build_list_transactions(1);

        let response = UreqTransport::new().execute(request).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(response.body.contains("\"transactions\""));
        assert!(response
            .headers
            .iter()
            .any(|(name, value)| name == "content-type" && value.starts_with("application/json")));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_status_is_data() {
        let base = serve(Scenario::ServerError).await;
        let request = ExpensesClient::new(&base).build_list_transactions(1);

        let response = UreqTransport::new().execute(request).await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(response.body, "internal error");
    }
}
