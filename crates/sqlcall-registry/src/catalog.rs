//! Catalog providers.
//!
//! A catalog is the static data set that populates a registry: every
//! (operator, signature, strategy) triple plus the names of the context
//! functions to resolve. The registry does not judge whether entries make
//! sense; it only checks context function names and duplicate keys.

use sqlcall_core::OperatorId;

use crate::signature::Signature;

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct CatalogEntry<S> {
    pub operator: OperatorId,
    pub signature: Signature,
    pub strategy: S,
}

impl<S> CatalogEntry<S> {
    pub fn new(operator: OperatorId, signature: impl Into<Signature>, strategy: S) -> Self {
        Self {
            operator,
            signature: signature.into(),
            strategy,
        }
    }
}

/// Source of registry contents.
pub trait CatalogProvider<S> {
    /// Entries in registration order.
    fn entries(&self) -> Vec<CatalogEntry<S>>;

    /// Context functions to resolve against the execution mode.
    fn context_functions(&self) -> Vec<OperatorId> {
        Vec::new()
    }
}
