pub mod cat_fact_route;
pub mod hello_route;
pub mod run;

use actix_web::web::{get, ServiceConfig};

/// Registers `GET /hello`.
pub fn configure_hello(cfg: &mut ServiceConfig) {
    cfg.route("/hello", get().to(hello_route::handler));
}

/// Registers `GET /cat-fact`. Expects a `web::Data<dyn FactService>` to be
/// available as app data.
///
/// [`FactService`]: crate::data_sources::FactService
pub fn configure_cat_fact(cfg: &mut ServiceConfig) {
    cfg.route("/cat-fact", get().to(cat_fact_route::handler));
}
