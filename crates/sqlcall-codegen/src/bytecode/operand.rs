//! Inline operand encodings for `Compare` and `TimePoint`.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use sqlcall_core::{TypeFamily, TypeRoot};
use sqlcall_registry::TimePoint;

/// Comparison performed by `Compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CompareKind {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Runtime representation of the compared values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ValueClass {
    I32,
    I64,
    F32,
    F64,
    Decimal,
    Boolean,
    Str,
    Bytes,
    Date,
    Time,
    Timestamp,
}

impl ValueClass {
    /// Representation of values of `root`, if they are comparable.
    pub fn of(root: TypeRoot) -> Option<Self> {
        let class = match root {
            TypeRoot::BigInt => ValueClass::I64,
            TypeRoot::Float => ValueClass::F32,
            TypeRoot::Double => ValueClass::F64,
            TypeRoot::Decimal => ValueClass::Decimal,
            TypeRoot::Boolean => ValueClass::Boolean,
            TypeRoot::Date => ValueClass::Date,
            _ if root.is_in(TypeFamily::INTEGER_NUMERIC) => ValueClass::I32,
            _ if root.is_in(TypeFamily::CHARACTER_STRING) => ValueClass::Str,
            _ if root.is_in(TypeFamily::BINARY_STRING) => ValueClass::Bytes,
            _ if root.is_in(TypeFamily::TIME) => ValueClass::Time,
            _ if root.is_in(TypeFamily::TIMESTAMP) => ValueClass::Timestamp,
            _ => return None,
        };
        Some(class)
    }
}

/// How often a `TimePoint` instruction reads the execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum EvalScope {
    /// Every evaluation reads a fresh value.
    PerCall,
    /// Read once per record and reused for every call within it.
    PerRecord,
    /// Read once when the query starts.
    PerQuery,
}

/// Encoding of a time point in the `TimePoint` instruction.
pub fn time_point_code(point: TimePoint) -> u8 {
    match point {
        TimePoint::LocalTime => 0,
        TimePoint::LocalTimestamp => 1,
        TimePoint::CurrentTime => 2,
        TimePoint::CurrentTimestamp => 3,
        TimePoint::CurrentDate => 4,
        TimePoint::Now => 5,
        TimePoint::CurrentRowTimestamp => 6,
    }
}
