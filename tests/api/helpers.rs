use std::net::TcpListener;

use scorecard::{
    configuration::{get_configuration, FetchMode, Settings},
    startup::run,
};
use wiremock::MockServer;

pub const DASHBOARD_ORIGIN: &str = "http://dashboard.test";
pub const PROXY_API_KEY: &str = "test-key";
pub const ANSWER_KEY_HTML: &str = include_str!("../fixtures/answer_key.html");

pub struct TestApp {
    pub address: String,
    /// Stands in for the scraping proxy.
    pub upstream: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn get_scrape(&self, target_url: Option<&str>) -> reqwest::Response {
        let mut request = self.client.get(format!("{}/scrape", self.address));
        if let Some(url) = target_url {
            request = request.query(&[("url", url)]);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn upstream_hits(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    let upstream = MockServer::start().await;

    let mut configuration = get_configuration().expect("Failed to read configuration.");
    configuration.fetcher.mode = FetchMode::Proxy;
    configuration.fetcher.proxy_url = upstream.uri();
    configuration.fetcher.api_key = PROXY_API_KEY.to_string();
    configuration.extractor.strict = false;
    configuration.cors.allowed_origins = vec![DASHBOARD_ORIGIN.to_string()];
    customize(&mut configuration);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let server = run(listener, configuration).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        upstream,
        client: reqwest::Client::new(),
    }
}
