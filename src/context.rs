//! Compilation context.
//!
//! A `Context` owns the built registry. It is created once, before any
//! compilation, and then shared: cloning is cheap and every clone reads the
//! same immutable registry.
//!
//! # Example
//!
//! ```
//! use sqlcall::{Config, Context, LogicalType, Operand, operators};
//!
//! let ctx = Context::new(Config::default()).unwrap();
//! let mut session = ctx.session();
//!
//! let call = session
//!     .compile_call(operators::LOG, &[Operand::slot(0, LogicalType::int())])
//!     .unwrap();
//! assert_eq!(call.result_type, LogicalType::double());
//! ```

use std::sync::Arc;

use sqlcall_codegen::{
    CallCompiler, CallStrategy, CompiledCall, ConstantPool, Operand, StandardCatalog,
};
use sqlcall_core::{CodegenError, OperatorId};
use sqlcall_registry::{CallRegistry, CatalogProvider, ExecutionMode};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Shared, immutable compilation context.
#[derive(Debug, Clone)]
pub struct Context {
    config: Config,
    registry: Arc<CallRegistry<CallStrategy>>,
}

impl Context {
    /// Build a context over the standard catalog.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_catalog(config, &StandardCatalog)
    }

    /// Build a context over a custom catalog.
    pub fn with_catalog<C>(config: Config, catalog: &C) -> Result<Self>
    where
        C: CatalogProvider<CallStrategy> + ?Sized,
    {
        let registry = CallRegistry::from_catalog(catalog, config.registry)?;
        debug!(entries = registry.len(), mode = %registry.execution_mode(), "context initialized");
        Ok(Self {
            config,
            registry: Arc::new(registry),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.registry.execution_mode()
    }

    pub fn registry(&self) -> &Arc<CallRegistry<CallStrategy>> {
        &self.registry
    }

    /// Start a compilation session.
    pub fn session(&self) -> Session<'_> {
        Session {
            compiler: CallCompiler::new(&self.registry),
            constants: ConstantPool::new(),
        }
    }
}

/// One compilation: owns the constant pool and the resolution memo.
///
/// Not shared between threads; create one session per compilation.
pub struct Session<'ctx> {
    compiler: CallCompiler<'ctx>,
    constants: ConstantPool,
}

impl Session<'_> {
    /// Compile `operator` applied to `operands`.
    ///
    /// A call no registered signature accepts fails with
    /// [`CodegenError::NoMatchingSignature`].
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_call(
        &mut self,
        operator: OperatorId,
        operands: &[Operand],
    ) -> std::result::Result<CompiledCall, CodegenError> {
        self.compiler.compile_call(operator, operands, &mut self.constants)
    }

    /// Constants referenced by every call compiled so far.
    pub fn constants(&self) -> &ConstantPool {
        &self.constants
    }

    /// Finish the session, keeping its constant pool.
    pub fn into_constants(self) -> ConstantPool {
        self.constants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlcall_codegen::Literal;
    use sqlcall_core::{LogicalType, operators};
    use sqlcall_registry::RegistryConfig;

    #[test]
    fn context_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Context>();
    }

    #[test]
    fn mode_comes_from_config() {
        let ctx = Context::new(RegistryConfig::batch().into()).unwrap();
        assert_eq!(ctx.execution_mode(), ExecutionMode::Batch);
    }

    #[test]
    fn clones_share_the_registry() {
        let ctx = Context::new(Config::default()).unwrap();
        let clone = ctx.clone();
        assert!(Arc::ptr_eq(ctx.registry(), clone.registry()));
    }

    #[test]
    fn session_shares_constants_across_calls() {
        let ctx = Context::new(Config::default()).unwrap();
        let mut session = ctx.session();
        let operands = [
            Operand::slot(0, LogicalType::double()),
            Operand::literal(Literal::Double(10.0), LogicalType::double().not_null()),
        ];
        session.compile_call(operators::LOG, &operands).unwrap();
        session.compile_call(operators::POWER, &operands).unwrap();
        session.compile_call(operators::LOG, &operands).unwrap();
        // 10.0, LOG, POWER
        assert_eq!(session.constants().len(), 3);
    }
}
