//! Call compilation.
//!
//! [`CallCompiler`] is the consumer of the resolver: it resolves a call to a
//! strategy, turns a miss into [`CodegenError::NoMatchingSignature`], and lets
//! the strategy emit the call into a fresh chunk.
//!
//! Resolution depends only on the operator and the operand roots, so the
//! outcome (hit or miss) is memoized per distinct `(operator, roots)` pair for
//! the compiler's lifetime.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use sqlcall_core::{CodegenError, LogicalType, OperatorId, TypeRoot};
use sqlcall_registry::{CallRegistry, KeyRef, MatchKind, RegistryKey, Resolution};
use tracing::{debug, trace};

use crate::bytecode::{BytecodeChunk, ConstantPool};
use crate::emit::CodeEmitter;
use crate::site::{CallSite, DisplayOperands, Operand};
use crate::strategy::CallStrategy;

/// Output of compiling one call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCall {
    pub chunk: BytecodeChunk,
    pub result_type: LogicalType,
    pub match_kind: MatchKind,
}

/// Compiles calls against one registry.
pub struct CallCompiler<'r> {
    registry: &'r CallRegistry<CallStrategy>,
    memo: IndexMap<RegistryKey, Option<Resolution<'r, CallStrategy>>, FxBuildHasher>,
}

impl<'r> CallCompiler<'r> {
    pub fn new(registry: &'r CallRegistry<CallStrategy>) -> Self {
        Self {
            registry,
            memo: IndexMap::default(),
        }
    }

    pub fn registry(&self) -> &'r CallRegistry<CallStrategy> {
        self.registry
    }

    /// Resolve `operator` applied to operands with the given roots.
    ///
    /// Memo hits look up a borrowed key; only the first resolution of a pair
    /// allocates.
    pub fn resolve(
        &mut self,
        operator: OperatorId,
        roots: &[TypeRoot],
    ) -> Option<Resolution<'r, CallStrategy>> {
        let key = KeyRef::new(operator, roots);
        if let Some(&cached) = self.memo.get(&key) {
            return cached;
        }
        let resolution = self.registry.resolve_roots(operator, roots);
        self.memo.insert(key.into_key(), resolution);
        resolution
    }

    /// Compile `operator` applied to `operands`.
    ///
    /// Literal operands are added to `constants`. A call that fails to emit
    /// leaves `constants` as it found it.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_call(
        &mut self,
        operator: OperatorId,
        operands: &[Operand],
        constants: &mut ConstantPool,
    ) -> Result<CompiledCall, CodegenError> {
        let roots: Vec<TypeRoot> = operands.iter().map(Operand::root).collect();
        let Some(resolution) = self.resolve(operator, &roots) else {
            debug!(
                operator = %operator,
                operands = %DisplayOperands(operands),
                "no matching signature"
            );
            return Err(CodegenError::NoMatchingSignature {
                operator: operator.name().to_string(),
                operands: DisplayOperands(operands).to_string(),
            });
        };

        let mark = constants.len();
        let mut emitter = CodeEmitter::new(constants);
        let site = CallSite {
            operator,
            signature: resolution.signature(),
            operands,
        };
        let emitted = resolution.strategy.emit(&mut emitter, &site);
        let chunk = emitter.finish();
        let result_type = match emitted {
            Ok(ty) => ty,
            Err(err) => {
                constants.truncate(mark);
                return Err(err);
            }
        };

        trace!(
            operator = %operator,
            signature = %resolution.signature(),
            result = %result_type,
            bytes = chunk.len(),
            "compiled call"
        );
        Ok(CompiledCall {
            chunk,
            result_type,
            match_kind: resolution.kind,
        })
    }

    /// Number of distinct `(operator, roots)` pairs resolved so far.
    pub fn memoized(&self) -> usize {
        self.memo.len()
    }
}
