use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use tracing::instrument;

use super::{FactError, FactService};
use crate::fact::Fact;

pub struct CatFactsApi {
    client: ClientWithMiddleware,
    base_url: String,
}

impl CatFactsApi {
    pub fn new(base_url: String, client: ClientWithMiddleware) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl FactService for CatFactsApi {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn get_fact(&self) -> Result<Fact, FactError> {
        // For an example, see: https://catfact.ninja/fact
        let response = self
            .client
            .get(format!("{}/fact", self.base_url))
            .send()
            .await
            .map_err(FactError::Unavailable)?
            .error_for_status()
            .map_err(|error| FactError::Unavailable(error.into()))?;

        // A body cut off mid-read is a transport fault, not a parse failure.
        let body = response
            .bytes()
            .await
            .map_err(|error| FactError::Unavailable(error.into()))?;

        serde_json::from_slice::<Fact>(&body).map_err(FactError::MalformedResponse)
    }
}
