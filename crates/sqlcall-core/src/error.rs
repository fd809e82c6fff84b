//! Error types shared by the sqlcall crates.
//!
//! Errors are organized by the phase that produces them:
//!
//! ```text
//! TypeError      - Invalid logical type parameters
//! RegistryError  - Fatal registry construction errors
//! CodegenError   - Call-site code generation errors
//! ```
//!
//! A lookup miss is not an error at the registry level. It only becomes
//! [`CodegenError::NoMatchingSignature`] once the code generator decides the
//! call cannot be compiled.

use thiserror::Error;

use crate::TypeRoot;

// ============================================================================
// Type Errors
// ============================================================================

/// Errors raised while constructing a [`LogicalType`](crate::LogicalType).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("decimal precision must be between 1 and 38 (both inclusive), got {precision}")]
    InvalidDecimalPrecision { precision: u8 },

    #[error("decimal scale must be between 0 and the precision {precision} (both inclusive), got {scale}")]
    InvalidDecimalScale { precision: u8, scale: u8 },

    #[error("{root} length must be at least 1, got {length}")]
    InvalidLength { root: TypeRoot, length: u32 },

    #[error("{root} precision must be between 0 and 9 (both inclusive), got {precision}")]
    InvalidTimePrecision { root: TypeRoot, precision: u8 },
}

// ============================================================================
// Registry Errors
// ============================================================================

/// Errors that abort registry construction.
///
/// None of these are recoverable locally: a registry that fails to build is
/// never handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A context function name outside the known set was registered.
    #[error("unsupported context function: {name}")]
    UnknownContextFunction {
        /// Display name of the offending operator.
        name: String,
    },

    /// The catalog registered the same key twice under the reject policy.
    #[error("duplicate registry entry: {operator}({signature})")]
    DuplicateEntry {
        /// Display name of the operator.
        operator: String,
        /// Comma separated operand roots.
        signature: String,
    },
}

// ============================================================================
// Codegen Errors
// ============================================================================

/// Errors raised while emitting code for a call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// No registered strategy accepts the call's operand types.
    #[error("no matching signature for {operator}({operands})")]
    NoMatchingSignature {
        /// Display name of the operator.
        operator: String,
        /// Comma separated operand types.
        operands: String,
    },

    /// A strategy received a different number of operands than it handles.
    #[error("{operator} expects {expected} operand(s), found {found}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        found: usize,
    },

    /// An operand slot does not fit the instruction encoding.
    #[error("operand slot {slot} exceeds the maximum of 255")]
    OperandSlotOverflow { slot: usize },

    /// The constant pool is full.
    #[error("constant pool exceeds {max} entries")]
    ConstantPoolOverflow { max: usize },

    /// An operand cannot be widened to the root the strategy was matched on.
    #[error("cannot convert {from} to {to}")]
    UnsupportedConversion { from: TypeRoot, to: TypeRoot },

    /// A strategy was registered for an operand root it cannot emit.
    #[error("{operator} has no instruction for {root} operands")]
    UnsupportedOperand { operator: String, root: TypeRoot },

    /// A derived result type is out of range.
    #[error(transparent)]
    InvalidResultType(#[from] TypeError),
}
