pub mod configuration;
pub mod data_sources;
pub mod fact;
pub mod server;
pub mod telemetry;

pub use configuration::Configuration;
pub use fact::Fact;
pub use server::run::run_server;
pub use telemetry::initialise_tracing;
