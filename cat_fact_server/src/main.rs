use std::net::TcpListener;

use anyhow::Context;
use cat_fact_server::{initialise_tracing, run_server, Configuration};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Configuration::load().context("Failed to load server configuration")?;
    initialise_tracing(&config.log_filter);

    let address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&address).context(format!("Failed to bind to {}", address))?;
    tracing::info!(%address, "Cat fact server listening");

    run_server(config, listener)
        .await
        .context("Failed to build server")?
        .await
        .context("Server terminated unexpectedly")?;
    Ok(())
}
