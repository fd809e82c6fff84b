//! Call resolution.
//!
//! Selects the strategy for an operator applied to concrete operand types.
//!
//! ## Algorithm
//!
//! 1. **Exact match**: a key with the same operator and pairwise equal roots.
//!    This is the only path that can match a zero-arity call.
//! 2. **Approximate match**: scan the operator's entries of the same arity in
//!    registration order. A candidate matches when every position
//!    - is decimal on both sides (precision and scale are ignored), or
//!    - is a numeric primitive on both sides and the input root equals or
//!      promotes to the candidate root, or
//!    - has identical roots.
//!
//!    The first candidate that matches wins.
//! 3. Otherwise nothing matches. That is not an error here; the caller
//!    decides whether it is fatal.

use std::fmt;

use sqlcall_core::{LogicalType, OperatorId, TypeRoot};
use tracing::trace;

use crate::promotion::is_promotable;
use crate::registry::CallRegistry;
use crate::signature::{KeyRef, RegistryKey, Signature};

/// How a resolution was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Operand roots equal the registered signature.
    Exact,
    /// At least one operand was widened or decimal-wildcarded.
    Approximate,
}

/// A successful resolution.
#[derive(Debug)]
pub struct Resolution<'r, S> {
    /// The selected strategy.
    pub strategy: &'r S,
    /// The registered key the strategy was found under.
    pub key: &'r RegistryKey,
    pub kind: MatchKind,
}

impl<S> Clone for Resolution<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Resolution<'_, S> {}

impl<'r, S> Resolution<'r, S> {
    /// The signature the strategy was written for.
    #[inline]
    pub fn signature(&self) -> &'r Signature {
        &self.key.signature
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

/// Check whether an input root at one position satisfies a candidate root.
///
/// Widening only flows from the input to the candidate: an INTEGER input
/// satisfies a DOUBLE candidate, a DOUBLE input never satisfies an INTEGER one.
#[inline]
pub fn position_accepts(candidate: TypeRoot, input: TypeRoot) -> bool {
    if candidate.is_decimal() && input.is_decimal() {
        return true;
    }
    if candidate.is_numeric_primitive() && input.is_numeric_primitive() {
        return candidate == input || is_promotable(input, candidate);
    }
    candidate == input
}

/// Check a whole candidate signature against input roots, arity included.
pub fn signature_accepts(candidate: &[TypeRoot], input: &[TypeRoot]) -> bool {
    candidate.len() == input.len()
        && candidate
            .iter()
            .zip(input)
            .all(|(&c, &i)| position_accepts(c, i))
}

impl<S> CallRegistry<S> {
    /// Resolve `operator` applied to operands of the given types.
    pub fn resolve(
        &self,
        operator: OperatorId,
        operands: &[LogicalType],
    ) -> Option<Resolution<'_, S>> {
        let roots: Vec<TypeRoot> = operands.iter().map(LogicalType::root).collect();
        self.resolve_roots(operator, &roots)
    }

    /// Resolve `operator` applied to operands with the given roots.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_roots(
        &self,
        operator: OperatorId,
        roots: &[TypeRoot],
    ) -> Option<Resolution<'_, S>> {
        if let Some((_, key, strategy)) = self.entries.get_full(&KeyRef { operator, roots }) {
            trace!(operator = %operator, signature = %key.signature, "exact match");
            return Some(Resolution {
                strategy,
                key,
                kind: MatchKind::Exact,
            });
        }

        if roots.is_empty() {
            trace!(operator = %operator, "no zero-arity entry");
            return None;
        }

        let found = self
            .entries_of(operator)
            .find(|(key, _)| signature_accepts(key.signature.roots(), roots));

        match found {
            Some((key, strategy)) => {
                trace!(
                    operator = %operator,
                    operands = %DisplayRoots(roots),
                    signature = %key.signature,
                    "approximate match"
                );
                Some(Resolution {
                    strategy,
                    key,
                    kind: MatchKind::Approximate,
                })
            }
            None => {
                trace!(operator = %operator, operands = %DisplayRoots(roots), "no match");
                None
            }
        }
    }

    /// The strategy for `operator` applied to `operands`, if any.
    #[inline]
    pub fn lookup(&self, operator: OperatorId, operands: &[LogicalType]) -> Option<&S> {
        self.resolve(operator, operands).map(|r| r.strategy)
    }

    #[inline]
    pub fn lookup_roots(&self, operator: OperatorId, roots: &[TypeRoot]) -> Option<&S> {
        self.resolve_roots(operator, roots).map(|r| r.strategy)
    }
}

struct DisplayRoots<'a>(&'a [TypeRoot]);

impl fmt::Display for DisplayRoots<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::signature::write_roots(f, self.0)
    }
}
