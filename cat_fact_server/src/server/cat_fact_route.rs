use actix_web::web;
use tracing::instrument;

use crate::data_sources::{FactError, FactService};
use crate::fact::Fact;

#[instrument(skip(fact_service))]
pub async fn handler(
    fact_service: web::Data<dyn FactService>,
) -> Result<web::Json<Fact>, FactError> {
    let fact = fact_service.get_fact().await.map_err(|error| {
        tracing::error!(error = ?error, "Failed to get a cat fact");
        error
    })?;

    Ok(web::Json(fact))
}
