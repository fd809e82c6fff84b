//! Result types of DECIMAL arithmetic.
//!
//! Each rule derives an unbounded precision and scale from the operands and
//! then fits it into the 38 digit maximum with [`adjust_precision_scale`].

use sqlcall_core::{LogicalType, TypeError};

use crate::strategy::ArithmeticOp;

/// Largest decimal precision.
pub const MAX_PRECISION: u32 = LogicalType::MAX_DECIMAL_PRECISION as u32;

/// Scale is never reduced below this while adjusting (unless it already was).
pub const MIN_ADJUSTED_SCALE: u32 = 6;

/// Fit a derived precision and scale into [`MAX_PRECISION`].
///
/// Integral digits are preserved first; the scale gives way, but never below
/// `min(scale, MIN_ADJUSTED_SCALE)`.
pub fn adjust_precision_scale(precision: u32, scale: u32) -> (u8, u8) {
    if precision <= MAX_PRECISION {
        return (precision.max(1) as u8, scale as u8);
    }
    let int_digits = precision - scale;
    let max_scale = MAX_PRECISION.saturating_sub(int_digits);
    let min_scale = scale.min(MIN_ADJUSTED_SCALE);
    (MAX_PRECISION as u8, max_scale.max(min_scale) as u8)
}

/// Unbounded precision and scale of `(p1, s1) op (p2, s2)`.
fn derive(op: ArithmeticOp, (p1, s1): (u32, u32), (p2, s2): (u32, u32)) -> (u32, u32) {
    match op {
        ArithmeticOp::Add | ArithmeticOp::Subtract => {
            let scale = s1.max(s2);
            ((p1 - s1).max(p2 - s2) + scale + 1, scale)
        }
        ArithmeticOp::Multiply => (p1 + p2, s1 + s2),
        ArithmeticOp::Divide => {
            let scale = MIN_ADJUSTED_SCALE.max(s1 + p2 + 1);
            (p1 - s1 + s2 + scale, scale)
        }
        ArithmeticOp::Modulo => {
            let scale = s1.max(s2);
            ((p1 - s1).min(p2 - s2) + scale, scale)
        }
    }
}

/// Precision and scale of `left op right`.
pub fn result_precision_scale(op: ArithmeticOp, left: (u8, u8), right: (u8, u8)) -> (u8, u8) {
    let widen = |(p, s): (u8, u8)| (u32::from(p), u32::from(s));
    let (precision, scale) = derive(op, widen(left), widen(right));
    adjust_precision_scale(precision, scale)
}

/// Result type of `left op right` for two DECIMAL operands.
pub fn result_type(
    op: ArithmeticOp,
    left: (u8, u8),
    right: (u8, u8),
) -> Result<LogicalType, TypeError> {
    let (precision, scale) = result_precision_scale(op, left, right);
    LogicalType::decimal(precision, scale)
}
