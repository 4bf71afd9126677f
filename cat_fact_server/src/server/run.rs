use crate::data_sources::{CatFactsApi, FactService};
use crate::Configuration;
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use anyhow::{anyhow, Context};
use reqwest_middleware::ClientBuilder;
use reqwest_tracing::TracingMiddleware;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use super::{configure_cat_fact, configure_hello};

/// Starts the server on `listener`, fetching facts from the configured
/// cat facts API.
pub async fn run_server(
    config: Configuration,
    listener: TcpListener,
) -> Result<Server, anyhow::Error> {
    let client = ClientBuilder::new(
        reqwest::ClientBuilder::new()
            .build()
            .context("Failed to build http client")?,
    )
    .with(TracingMiddleware::default())
    .build();

    let fact_service: Arc<dyn FactService> =
        Arc::new(CatFactsApi::new(config.cat_facts_api_base_url, client));

    serve(fact_service, listener)
}

/// Starts the server on `listener` with an explicitly supplied fact service.
pub fn serve(
    fact_service: Arc<dyn FactService>,
    listener: TcpListener,
) -> Result<Server, anyhow::Error> {
    let fact_service: Data<dyn FactService> = Data::from(fact_service);

    let prometheus = PrometheusMetricsBuilder::new("")
        .endpoint("/metrics")
        .build()
        .map_err(|error| anyhow!("Failed to build metrics middleware: {}", error))?;

    let server = HttpServer::new(move || {
        App::new()
            // /metrics shares the listener with the public routes.
            .wrap(prometheus.clone())
            .wrap(TracingLogger::default())
            .app_data(fact_service.clone())
            .configure(configure_hello)
            .configure(configure_cat_fact)
    })
    .listen(listener)
    .context("Failed to listen on the provided socket")?
    .run();

    Ok(server)
}
