//! Call sites handed to strategies.

use std::fmt;

use sqlcall_core::{LogicalType, OperatorId, TypeRoot};
use sqlcall_registry::Signature;

/// A literal operand value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Double(f64),
    String(String),
    Null,
}

/// Where an operand's value comes from at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum OperandSource {
    /// Slot of the enclosing expression's evaluated inputs.
    Slot(usize),
    /// Value known at compile time.
    Literal(Literal),
}

/// One operand of a call together with its type.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub source: OperandSource,
    pub ty: LogicalType,
}

impl Operand {
    pub fn slot(slot: usize, ty: LogicalType) -> Self {
        Self {
            source: OperandSource::Slot(slot),
            ty,
        }
    }

    pub fn literal(value: Literal, ty: LogicalType) -> Self {
        Self {
            source: OperandSource::Literal(value),
            ty,
        }
    }

    /// A NULL literal of type `ty`, forced nullable.
    pub fn null(ty: LogicalType) -> Self {
        Self::literal(Literal::Null, ty.with_nullable(true))
    }

    #[inline]
    pub fn root(&self) -> TypeRoot {
        self.ty.root()
    }
}

/// A resolved call: the operator, the signature the strategy was matched on
/// and the actual operands.
#[derive(Debug, Clone, Copy)]
pub struct CallSite<'a> {
    pub operator: OperatorId,
    pub signature: &'a Signature,
    pub operands: &'a [Operand],
}

impl CallSite<'_> {
    #[inline]
    pub fn arity(&self) -> usize {
        self.operands.len()
    }

    /// True if any operand may be NULL.
    pub fn any_nullable(&self) -> bool {
        self.operands.iter().any(|o| o.ty.is_nullable())
    }

    /// Root the strategy expects at operand `index`.
    pub fn target_root(&self, index: usize) -> Option<TypeRoot> {
        self.signature.roots().get(index).copied()
    }
}

/// Comma separated operand types, for diagnostics.
pub struct DisplayOperands<'a>(pub &'a [Operand]);

impl fmt::Display for DisplayOperands<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, operand) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", operand.ty)?;
        }
        Ok(())
    }
}
