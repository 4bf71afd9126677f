use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub cat_facts_api_base_url: String,
    /// Default `tracing` filter directive, overridden by `RUST_LOG` when set.
    pub log_filter: String,
}

impl Configuration {
    /// Loads the configuration from, in increasing order of precedence:
    /// built-in defaults, an optional `configuration.{toml,yaml,json}` file in
    /// the working directory, and `CAT_FACT_SERVER_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            File::with_name("configuration").required(false),
            Environment::with_prefix("CAT_FACT_SERVER").try_parsing(true),
        )
    }

    fn load_from(
        file: impl Source + Send + Sync + 'static,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 12345)?
            .set_default("cat_facts_api_base_url", "https://catfact.ninja")?
            .set_default("log_filter", "info")?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
