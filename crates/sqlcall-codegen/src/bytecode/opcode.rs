//! Bytecode instruction set for compiled call sites.
//!
//! Stack-based: operands are pushed, instructions pop their inputs and push
//! a single result. Multi-byte operands are encoded big-endian directly after
//! the opcode byte.
//!
//! NULL propagates through every instruction except `PushNull`: if any popped
//! input is NULL the pushed result is NULL.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use sqlcall_core::TypeRoot;

/// Bytecode instruction opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OpCode {
    // =========================================================================
    // Constants & Operands
    // =========================================================================
    /// Push constant from pool.
    /// Operand: u8 constant index
    Constant,
    /// Push constant from pool (wide).
    /// Operand: u16 constant index
    ConstantWide,
    /// Push a typed NULL.
    PushNull,
    /// Push the value of an operand slot of the enclosing expression.
    /// Operand: u8 slot
    LoadOperand,

    // =========================================================================
    // Widening Conversions
    // =========================================================================
    /// TINYINT to SMALLINT.
    I8toI16,
    /// TINYINT to INTEGER.
    I8toI32,
    /// TINYINT to BIGINT.
    I8toI64,
    /// TINYINT to FLOAT.
    I8toF32,
    /// TINYINT to DOUBLE.
    I8toF64,
    /// SMALLINT to INTEGER.
    I16toI32,
    /// SMALLINT to BIGINT.
    I16toI64,
    /// SMALLINT to FLOAT.
    I16toF32,
    /// SMALLINT to DOUBLE.
    I16toF64,
    /// INTEGER to BIGINT.
    I32toI64,
    /// INTEGER to FLOAT.
    I32toF32,
    /// INTEGER to DOUBLE.
    I32toF64,
    /// BIGINT to FLOAT.
    I64toF32,
    /// BIGINT to DOUBLE.
    I64toF64,
    /// FLOAT to DOUBLE.
    F32toF64,

    // =========================================================================
    // Arithmetic - INTEGER
    // =========================================================================
    AddI32,
    SubI32,
    MulI32,
    DivI32,
    ModI32,
    NegI32,

    // =========================================================================
    // Arithmetic - BIGINT
    // =========================================================================
    AddI64,
    SubI64,
    MulI64,
    DivI64,
    ModI64,
    NegI64,

    // =========================================================================
    // Arithmetic - FLOAT
    // =========================================================================
    AddF32,
    SubF32,
    MulF32,
    DivF32,
    NegF32,

    // =========================================================================
    // Arithmetic - DOUBLE
    // =========================================================================
    AddF64,
    SubF64,
    MulF64,
    DivF64,
    NegF64,

    // =========================================================================
    // Arithmetic - DECIMAL
    // =========================================================================
    /// Operands: u8 result precision, u8 result scale
    AddDec,
    /// Operands: u8 result precision, u8 result scale
    SubDec,
    /// Operands: u8 result precision, u8 result scale
    MulDec,
    /// Operands: u8 result precision, u8 result scale
    DivDec,
    /// Operands: u8 result precision, u8 result scale
    ModDec,
    NegDec,

    // =========================================================================
    // Comparison
    // =========================================================================
    /// Compare the two topmost values and push a BOOLEAN.
    /// Operands: u8 [`CompareKind`](super::CompareKind), u8 [`ValueClass`](super::ValueClass)
    Compare,

    // =========================================================================
    // Calls
    // =========================================================================
    /// Call a runtime builtin.
    /// Operands: u16 constant index (operator hash), u8 argument count
    CallBuiltin,
    /// Read a point in time from the execution context.
    /// Operands: u8 [`TimePoint`](sqlcall_registry::TimePoint) code, u8 [`EvalScope`](super::EvalScope)
    TimePoint,
}

impl OpCode {
    /// Decode a byte, returning None for invalid values.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Size of the inline operands in bytes, not counting the opcode itself.
    pub fn operand_size(&self) -> usize {
        match self {
            OpCode::Constant | OpCode::LoadOperand => 1,
            OpCode::ConstantWide => 2,
            OpCode::AddDec
            | OpCode::SubDec
            | OpCode::MulDec
            | OpCode::DivDec
            | OpCode::ModDec
            | OpCode::Compare
            | OpCode::TimePoint => 2,
            OpCode::CallBuiltin => 3,
            _ => 0,
        }
    }

    /// The conversion instruction that widens `from` to `to`.
    ///
    /// Defined exactly for the promotable pairs.
    pub fn widening(from: TypeRoot, to: TypeRoot) -> Option<Self> {
        use TypeRoot::*;
        let op = match (from, to) {
            (TinyInt, SmallInt) => OpCode::I8toI16,
            (TinyInt, Integer) => OpCode::I8toI32,
            (TinyInt, BigInt) => OpCode::I8toI64,
            (TinyInt, Float) => OpCode::I8toF32,
            (TinyInt, Double) => OpCode::I8toF64,
            (SmallInt, Integer) => OpCode::I16toI32,
            (SmallInt, BigInt) => OpCode::I16toI64,
            (SmallInt, Float) => OpCode::I16toF32,
            (SmallInt, Double) => OpCode::I16toF64,
            (Integer, BigInt) => OpCode::I32toI64,
            (Integer, Float) => OpCode::I32toF32,
            (Integer, Double) => OpCode::I32toF64,
            (BigInt, Float) => OpCode::I64toF32,
            (BigInt, Double) => OpCode::I64toF64,
            (Float, Double) => OpCode::F32toF64,
            _ => return None,
        };
        Some(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlcall_registry::is_promotable;

    #[test]
    fn decode_roundtrips_every_opcode() {
        for byte in 0..=OpCode::TimePoint as u8 {
            let op = OpCode::from_u8(byte).unwrap();
            assert_eq!(u8::from(op), byte);
        }
        assert!(OpCode::from_u8(OpCode::TimePoint as u8 + 1).is_none());
        assert!(OpCode::from_u8(255).is_none());
    }

    #[test]
    fn every_promotable_pair_has_a_conversion() {
        let mut count = 0;
        for from in TypeRoot::ALL {
            for to in TypeRoot::ALL {
                let op = OpCode::widening(from, to);
                assert_eq!(op.is_some(), is_promotable(from, to), "{from} -> {to}");
                count += op.is_some() as usize;
            }
        }
        assert_eq!(count, 15);
    }

    #[test]
    fn conversions_are_distinct() {
        let mut seen = rustc_hash::FxHashSet::default();
        for from in TypeRoot::NUMERIC_PRIMITIVES {
            for to in TypeRoot::NUMERIC_PRIMITIVES {
                if let Some(op) = OpCode::widening(from, to) {
                    assert!(seen.insert(op), "{op:?} reused");
                }
            }
        }
    }

    #[test]
    fn operand_sizes() {
        assert_eq!(OpCode::PushNull.operand_size(), 0);
        assert_eq!(OpCode::I32toF64.operand_size(), 0);
        assert_eq!(OpCode::Constant.operand_size(), 1);
        assert_eq!(OpCode::ConstantWide.operand_size(), 2);
        assert_eq!(OpCode::MulDec.operand_size(), 2);
        assert_eq!(OpCode::NegDec.operand_size(), 0);
        assert_eq!(OpCode::CallBuiltin.operand_size(), 3);
    }
}
