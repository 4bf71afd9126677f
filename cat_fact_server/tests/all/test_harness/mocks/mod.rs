
pub use cat_facts_api::MockCatFactsApi;
