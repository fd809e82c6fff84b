//! Shared helpers for integration tests.

#![allow(dead_code)]

use sqlcall::{CallStrategy, CatalogEntry, CatalogProvider, OperatorId};

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A catalog built from explicit entries.
#[derive(Default)]
pub struct ListCatalog {
    pub entries: Vec<CatalogEntry<CallStrategy>>,
    pub context_functions: Vec<OperatorId>,
}

impl ListCatalog {
    pub fn with(mut self, entry: CatalogEntry<CallStrategy>) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_context_function(mut self, operator: OperatorId) -> Self {
        self.context_functions.push(operator);
        self
    }
}

impl CatalogProvider<CallStrategy> for ListCatalog {
    fn entries(&self) -> Vec<CatalogEntry<CallStrategy>> {
        self.entries.clone()
    }

    fn context_functions(&self) -> Vec<OperatorId> {
        self.context_functions.clone()
    }
}
