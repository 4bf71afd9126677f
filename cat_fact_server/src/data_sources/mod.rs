pub mod cat_facts_api;

use actix_web::ResponseError;
use async_trait::async_trait;

use crate::fact::Fact;

pub use cat_facts_api::CatFactsApi;

/// Something that can hand out cat facts.
///
/// The server only ever talks to this trait, so tests can swap the real
/// upstream client for a double that returns a fixed [`Fact`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactService: Send + Sync {
    async fn get_fact(&self) -> Result<Fact, FactError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FactError {
    /// The upstream could not be reached, or answered with a non-2xx status.
    #[error("The cat facts API is unavailable")]
    Unavailable(#[source] reqwest_middleware::Error),

    /// The upstream body could not be parsed into a [`Fact`].
    #[error("The cat facts API returned a malformed response")]
    MalformedResponse(#[source] serde_json::Error),
}

// Status code and body are left to actix-web's defaults (500, plain text).
impl ResponseError for FactError {}
