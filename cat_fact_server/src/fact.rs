use serde::{Deserialize, Serialize};

/// A single cat fact, as returned by the upstream API and by `/cat-fact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub fact: String,
}

impl Fact {
    pub fn new(fact: impl Into<String>) -> Self {
        Self { fact: fact.into() }
    }
}
