use async_trait::async_trait;
use cat_fact_server::data_sources::{FactError, FactService};
use cat_fact_server::Fact;

/// Returns the same fact on every call without touching the network.
pub struct FixedFactService(pub Fact);

#[async_trait]
impl FactService for FixedFactService {
    async fn get_fact(&self) -> Result<Fact, FactError> {
        Ok(self.0.clone())
    }
}

/// Fails every call as if the upstream were unreachable.
pub struct FailingFactService;

#[async_trait]
impl FactService for FailingFactService {
    async fn get_fact(&self) -> Result<Fact, FactError> {
        Err(FactError::Unavailable(reqwest_middleware::Error::Middleware(
            anyhow::anyhow!("connection refused"),
        )))
    }
}
