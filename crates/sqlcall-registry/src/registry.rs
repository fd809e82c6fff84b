//! CallRegistry - immutable store of call generation strategies.
//!
//! This module provides [`RegistryBuilder`], which collects entries during
//! construction, and [`CallRegistry`], the read-only store it produces.
//!
//! # Storage Model
//!
//! - **Entries**: an insertion-ordered map from [`RegistryKey`] to strategy.
//!   Insertion order is the order the approximate resolver scans in, so the
//!   first registered candidate wins an ambiguous match.
//! - **Operator index**: entry positions grouped by operator identity, so the
//!   approximate pass only visits entries of the operator being called.
//!
//! # Thread Safety
//!
//! Construction is single-threaded and happens entirely inside the builder.
//! [`RegistryBuilder::build`] consumes the builder, so no caller can observe
//! a partially populated registry. The resulting `CallRegistry` has no
//! interior mutability and is `Send + Sync` whenever the strategy type is;
//! share it with `Arc` and call `lookup` from any number of threads.
//!
//! # Example
//!
//! ```
//! use sqlcall_core::{LogicalType, TypeRoot, operators};
//! use sqlcall_registry::{RegistryBuilder, RegistryConfig};
//!
//! let mut builder = RegistryBuilder::new(RegistryConfig::default());
//! builder.register(operators::LOG, [TypeRoot::Double], "log_f64");
//! builder.register(operators::LOG, [TypeRoot::Decimal], "log_decimal");
//! let registry = builder.build().unwrap();
//!
//! assert_eq!(registry.lookup(operators::LOG, &[LogicalType::int()]), Some(&"log_f64"));
//! ```

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::{FxBuildHasher, FxHashMap};
use sqlcall_core::{OperatorId, RegistryError, TypeRoot};
use tracing::{debug, info};

use crate::catalog::CatalogProvider;
use crate::config::{DuplicatePolicy, ExecutionMode, RegistryConfig};
use crate::context::{ContextFunction, ContextStrategy};
use crate::signature::{KeyRef, RegistryKey, Signature};

type EntryMap<S> = IndexMap<RegistryKey, S, FxBuildHasher>;

/// Mutable, single-threaded registry construction.
pub struct RegistryBuilder<S> {
    config: RegistryConfig,
    entries: EntryMap<S>,
    /// Keys registered more than once, in the order the repeats happened.
    duplicates: Vec<RegistryKey>,
    context_functions: usize,
}

impl<S> RegistryBuilder<S> {
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_capacity(config, 0)
    }

    pub fn with_capacity(config: RegistryConfig, capacity: usize) -> Self {
        Self {
            config,
            entries: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            duplicates: Vec::new(),
            context_functions: 0,
        }
    }

    #[inline]
    pub fn execution_mode(&self) -> ExecutionMode {
        self.config.execution_mode
    }

    /// Insert or overwrite the entry for `(operator, signature)`.
    ///
    /// Never fails. Re-registering a key replaces the strategy in place (the
    /// entry keeps its original position); whether that is acceptable is
    /// decided by the duplicate policy when [`build`](Self::build) runs.
    pub fn register(
        &mut self,
        operator: OperatorId,
        signature: impl Into<Signature>,
        strategy: S,
    ) -> &mut Self {
        let key = RegistryKey::new(operator, signature);
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                debug!(key = %occupied.key(), "registry key registered twice; overwriting");
                self.duplicates.push(occupied.key().clone());
                occupied.insert(strategy);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(strategy);
            }
        }
        self
    }

    /// Resolve a zero-argument context function for this builder's execution
    /// mode and register it under the empty signature.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownContextFunction`] if `operator` is not one of
    /// the known context functions. Construction must not continue.
    pub fn register_context_function(
        &mut self,
        operator: OperatorId,
    ) -> Result<&mut Self, RegistryError>
    where
        S: ContextStrategy,
    {
        let function = ContextFunction::resolve(operator, self.config.execution_mode)?;
        debug!(
            operator = %operator,
            row_stable = function.row_stable,
            mode = %function.mode,
            "resolved context function"
        );
        self.context_functions += 1;
        Ok(self.register(operator, Signature::empty(), S::for_context_function(function)))
    }

    /// Finish construction.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateEntry`] for the first repeated key when the
    /// duplicate policy is [`DuplicatePolicy::Reject`].
    pub fn build(self) -> Result<CallRegistry<S>, RegistryError> {
        if self.config.duplicate_keys == DuplicatePolicy::Reject {
            if let Some(key) = self.duplicates.first() {
                return Err(RegistryError::DuplicateEntry {
                    operator: key.operator.name().to_string(),
                    signature: key.signature.to_string(),
                });
            }
        }

        let mut by_operator: FxHashMap<OperatorId, Vec<usize>> = FxHashMap::default();
        for (index, key) in self.entries.keys().enumerate() {
            by_operator.entry(key.operator).or_default().push(index);
        }

        info!(
            entries = self.entries.len(),
            operators = by_operator.len(),
            context_functions = self.context_functions,
            overwritten = self.duplicates.len(),
            mode = %self.config.execution_mode,
            "call registry built"
        );

        Ok(CallRegistry {
            entries: self.entries,
            by_operator,
            mode: self.config.execution_mode,
        })
    }
}

/// Immutable registry of call generation strategies.
///
/// Strategies are opaque: the registry stores and returns them by reference
/// and never inspects or invokes them.
#[derive(Debug)]
pub struct CallRegistry<S> {
    pub(crate) entries: EntryMap<S>,
    /// Operator -> entry positions, ascending (insertion order).
    pub(crate) by_operator: FxHashMap<OperatorId, Vec<usize>>,
    mode: ExecutionMode,
}

impl<S: ContextStrategy> CallRegistry<S> {
    /// Build a registry from a catalog provider.
    ///
    /// Catalog entries are registered first, in the provider's order, then
    /// every context function it names is resolved against
    /// `config.execution_mode`.
    pub fn from_catalog<C>(catalog: &C, config: RegistryConfig) -> Result<Self, RegistryError>
    where
        C: CatalogProvider<S> + ?Sized,
    {
        let entries = catalog.entries();
        let context_functions = catalog.context_functions();

        let mut builder =
            RegistryBuilder::with_capacity(config, entries.len() + context_functions.len());
        for entry in entries {
            builder.register(entry.operator, entry.signature, entry.strategy);
        }
        for operator in context_functions {
            builder.register_context_function(operator)?;
        }
        builder.build()
    }
}

impl<S> CallRegistry<S> {
    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Execution mode the context functions were specialized for.
    #[inline]
    pub fn execution_mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Exact-key access, without any promotion or decimal wildcarding.
    pub fn get(&self, operator: OperatorId, roots: &[TypeRoot]) -> Option<&S> {
        self.entries.get(&KeyRef { operator, roots })
    }

    pub fn contains(&self, operator: OperatorId, roots: &[TypeRoot]) -> bool {
        self.entries.contains_key(&KeyRef { operator, roots })
    }

    /// Whether any entry is registered for `operator`.
    pub fn has_operator(&self, operator: OperatorId) -> bool {
        self.by_operator.contains_key(&operator)
    }

    /// Registered signatures of `operator`, in registration order.
    pub fn signatures(&self, operator: OperatorId) -> impl Iterator<Item = &Signature> {
        self.entries_of(operator).map(|(key, _)| &key.signature)
    }

    /// All entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&RegistryKey, &S)> {
        self.entries.iter()
    }

    /// Entries of `operator` in registration order.
    pub(crate) fn entries_of(
        &self,
        operator: OperatorId,
    ) -> impl Iterator<Item = (&RegistryKey, &S)> {
        self.by_operator
            .get(&operator)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|&index| self.entries.get_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use sqlcall_core::operators;

    #[derive(Debug, Clone, PartialEq)]
    enum TestStrategy {
        Named(&'static str),
        Context(ContextFunction),
    }

    impl ContextStrategy for TestStrategy {
        fn for_context_function(function: ContextFunction) -> Self {
            TestStrategy::Context(function)
        }
    }

    struct TestCatalog {
        entries: Vec<CatalogEntry<TestStrategy>>,
        context: Vec<OperatorId>,
    }

    impl CatalogProvider<TestStrategy> for TestCatalog {
        fn entries(&self) -> Vec<CatalogEntry<TestStrategy>> {
            self.entries.clone()
        }

        fn context_functions(&self) -> Vec<OperatorId> {
            self.context.clone()
        }
    }

    fn named(name: &'static str) -> TestStrategy {
        TestStrategy::Named(name)
    }

    #[test]
    fn every_registered_key_is_retrievable() {
        let mut builder = RegistryBuilder::new(RegistryConfig::default());
        builder
            .register(operators::LOG, [TypeRoot::Double], named("a"))
            .register(operators::LOG, [TypeRoot::Decimal], named("b"))
            .register(operators::LOG, [TypeRoot::Double, TypeRoot::Double], named("c"))
            .register(operators::ABS, [TypeRoot::Integer], named("d"));
        let registry = builder.build().unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get(operators::LOG, &[TypeRoot::Double]), Some(&named("a")));
        assert_eq!(registry.get(operators::LOG, &[TypeRoot::Decimal]), Some(&named("b")));
        assert_eq!(
            registry.get(operators::LOG, &[TypeRoot::Double, TypeRoot::Double]),
            Some(&named("c"))
        );
        assert_eq!(registry.get(operators::ABS, &[TypeRoot::Integer]), Some(&named("d")));
        assert!(registry.get(operators::ABS, &[TypeRoot::BigInt]).is_none());
    }

    #[test]
    fn signatures_keep_registration_order() {
        let mut builder = RegistryBuilder::new(RegistryConfig::default());
        builder
            .register(operators::PLUS, [TypeRoot::Integer, TypeRoot::Integer], named("i"))
            .register(operators::MINUS, [TypeRoot::Integer, TypeRoot::Integer], named("m"))
            .register(operators::PLUS, [TypeRoot::Double, TypeRoot::Double], named("d"));
        let registry = builder.build().unwrap();

        let sigs: Vec<_> = registry.signatures(operators::PLUS).map(ToString::to_string).collect();
        assert_eq!(sigs, vec!["INTEGER, INTEGER", "DOUBLE, DOUBLE"]);
        assert_eq!(registry.signatures(operators::LOG).count(), 0);
        assert!(registry.has_operator(operators::MINUS));
        assert!(!registry.has_operator(operators::LOG));
    }

    #[test]
    fn duplicate_rejected_by_default() {
        let mut builder = RegistryBuilder::new(RegistryConfig::default());
        builder
            .register(operators::LN, [TypeRoot::Double], named("first"))
            .register(operators::LN, [TypeRoot::Double], named("second"));
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateEntry {
                operator: "LN".to_string(),
                signature: "DOUBLE".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_overwrites_when_allowed() {
        let config = RegistryConfig::default().with_duplicate_keys(DuplicatePolicy::Overwrite);
        let mut builder = RegistryBuilder::new(config);
        builder
            .register(operators::LN, [TypeRoot::Double], named("first"))
            .register(operators::LN, [TypeRoot::Decimal], named("decimal"))
            .register(operators::LN, [TypeRoot::Double], named("second"));
        let registry = builder.build().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(operators::LN, &[TypeRoot::Double]), Some(&named("second")));
        // The overwritten entry keeps its original position.
        let sigs: Vec<_> = registry.signatures(operators::LN).map(ToString::to_string).collect();
        assert_eq!(sigs, vec!["DOUBLE", "DECIMAL"]);
    }

    #[test]
    fn context_function_uses_builder_mode() {
        let mut builder = RegistryBuilder::<TestStrategy>::new(RegistryConfig::batch());
        builder.register_context_function(operators::LOCALTIMESTAMP).unwrap();
        let registry = builder.build().unwrap();

        match registry.get(operators::LOCALTIMESTAMP, &[]) {
            Some(TestStrategy::Context(f)) => {
                assert!(f.row_stable);
                assert_eq!(f.mode, ExecutionMode::Batch);
            }
            other => panic!("unexpected entry {other:?}"),
        }
        assert_eq!(registry.execution_mode(), ExecutionMode::Batch);
    }

    #[test]
    fn unknown_context_function_fails_construction() {
        let catalog = TestCatalog {
            entries: vec![CatalogEntry::new(operators::LOG, [TypeRoot::Double], named("log"))],
            context: vec![operators::NOW, OperatorId::function("CURRENT_USER")],
        };
        let result = CallRegistry::from_catalog(&catalog, RegistryConfig::default());
        assert!(matches!(
            result,
            Err(RegistryError::UnknownContextFunction { ref name }) if name == "CURRENT_USER"
        ));
    }

    #[test]
    fn from_catalog_registers_everything() {
        let catalog = TestCatalog {
            entries: vec![
                CatalogEntry::new(operators::LOG, [TypeRoot::Double], named("log")),
                CatalogEntry::new(operators::UPPER, [TypeRoot::Varchar], named("upper")),
            ],
            context: vec![operators::NOW, operators::LOCALTIME],
        };
        let registry = CallRegistry::from_catalog(&catalog, RegistryConfig::streaming()).unwrap();

        assert_eq!(registry.len(), 4);
        for entry in &catalog.entries {
            assert_eq!(
                registry.get(entry.operator, entry.signature.roots()),
                Some(&entry.strategy)
            );
        }
        assert!(registry.contains(operators::NOW, &[]));
        assert!(registry.contains(operators::LOCALTIME, &[]));
    }

    #[test]
    fn duplicate_context_function_is_rejected() {
        let catalog = TestCatalog {
            entries: Vec::new(),
            context: vec![operators::NOW, operators::NOW],
        };
        assert!(matches!(
            CallRegistry::from_catalog(&catalog, RegistryConfig::default()),
            Err(RegistryError::DuplicateEntry { .. })
        ));
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CallRegistry<TestStrategy>>();
    }
}
