pub mod fakes;
pub mod mocks;

use self::mocks::MockCatFactsApi;
use cat_fact_server::{initialise_tracing, run_server, Configuration};
use std::net::TcpListener;

pub struct TestHarness {
    pub client: reqwest::Client,

    /// The configuration that this instance of the service started with.
    pub config: Configuration,

    /// The mock upstream cat facts API.
    pub mock_cat_facts_api: MockCatFactsApi,
}

impl TestHarness {
    /// Starts a new instance of the service against a fresh
    /// [`MockCatFactsApi`], returning a `TestHarness` which can be used to
    /// interact with both.
    pub async fn start() -> Self {
        // Logs are noisy, so they are only emitted when asked for.
        if std::env::var("TEST_LOG").is_ok() {
            initialise_tracing("debug");
        }

        let mock_cat_facts_api = MockCatFactsApi::new().await;

        let host = "127.0.0.1";
        let listener = TcpListener::bind(format!("{}:0", host)).unwrap();
        let port = listener.local_addr().unwrap().port();
        let config = Configuration {
            host: host.into(),
            port,
            cat_facts_api_base_url: mock_cat_facts_api.base_url(),
            log_filter: "debug".into(),
        };

        let server = run_server(config.clone(), listener)
            .await
            .expect("Failed to build server");

        let _server_join_handle = actix_rt::spawn(server);

        let client = reqwest::ClientBuilder::new()
            .build()
            .expect("Failed to build http client");

        TestHarness {
            client,
            config,
            mock_cat_facts_api,
        }
    }

    /// Builds a URL to a relative path hosted by our service
    pub fn build_url(&self, relative_path: impl Into<String>) -> String {
        format!(
            "http://{}:{}{}",
            self.config.host,
            self.config.port,
            relative_path.into()
        )
    }
}
