//! Code generation strategies.
//!
//! One variant per operator family. A strategy is matched by the registry on
//! operand roots only; it then receives the full operand types and emits the
//! instructions for the call, returning the call's result type.
//!
//! Operands are pushed left to right. An operand whose root is narrower than
//! the matched signature root is widened right after it is pushed, so every
//! instruction only ever sees values of the signature's roots.
//!
//! The result is nullable if any operand is nullable. Context functions take
//! no operands and are never nullable.

use std::ops::RangeInclusive;

use sqlcall_core::{CodegenError, LogicalType, TypeRoot};
use sqlcall_registry::{ContextFunction, ContextStrategy, TimePoint};

use crate::bytecode::{CompareKind, EvalScope, OpCode, ValueClass, time_point_code};
use crate::decimal;
use crate::emit::CodeEmitter;
use crate::site::CallSite;

/// Longest CHAR or VARCHAR a string function can produce.
pub const MAX_LENGTH: u32 = i32::MAX as u32;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl ComparisonOp {
    fn kind(self) -> CompareKind {
        match self {
            ComparisonOp::Equals => CompareKind::Eq,
            ComparisonOp::NotEquals => CompareKind::Ne,
            ComparisonOp::LessThan => CompareKind::Lt,
            ComparisonOp::LessThanOrEqual => CompareKind::Le,
            ComparisonOp::GreaterThan => CompareKind::Gt,
            ComparisonOp::GreaterThanOrEqual => CompareKind::Ge,
        }
    }
}

/// Numeric functions evaluated by runtime builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFunction {
    /// `LOG(x)` natural logarithm, or `LOG(base, x)`.
    Log,
    Log10,
    Ln,
    Exp,
    Sqrt,
    Power,
    /// Keeps the operand type.
    Abs,
}

/// Character string functions evaluated by runtime builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFunction {
    Upper,
    Lower,
    CharLength,
    Concat,
}

/// How to generate code for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallStrategy {
    /// Binary arithmetic on numeric primitives.
    Arithmetic(ArithmeticOp),
    /// Binary arithmetic on DECIMAL, with derived result precision and scale.
    DecimalArithmetic(ArithmeticOp),
    /// Unary minus.
    Negate,
    Comparison(ComparisonOp),
    MathFunction(MathFunction),
    StringFunction(StringFunction),
    /// Context function specialized for the execution mode.
    TimePoint(ContextFunction),
}

impl ContextStrategy for CallStrategy {
    fn for_context_function(function: ContextFunction) -> Self {
        CallStrategy::TimePoint(function)
    }
}

impl CallStrategy {
    /// Number of operands this strategy handles.
    pub fn arity(&self) -> RangeInclusive<usize> {
        match self {
            CallStrategy::Arithmetic(_)
            | CallStrategy::DecimalArithmetic(_)
            | CallStrategy::Comparison(_)
            | CallStrategy::MathFunction(MathFunction::Power)
            | CallStrategy::StringFunction(StringFunction::Concat) => 2..=2,
            CallStrategy::MathFunction(MathFunction::Log) => 1..=2,
            CallStrategy::Negate
            | CallStrategy::MathFunction(_)
            | CallStrategy::StringFunction(_) => 1..=1,
            CallStrategy::TimePoint(_) => 0..=0,
        }
    }

    /// Emit the call and return its result type.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn emit(
        &self,
        emitter: &mut CodeEmitter<'_>,
        site: &CallSite<'_>,
    ) -> Result<LogicalType, CodegenError> {
        self.check_arity(site)?;

        let result = match *self {
            CallStrategy::Arithmetic(op) => emit_arithmetic(op, emitter, site)?,
            CallStrategy::DecimalArithmetic(op) => emit_decimal_arithmetic(op, emitter, site)?,
            CallStrategy::Negate => emit_negate(emitter, site)?,
            CallStrategy::Comparison(op) => emit_comparison(op, emitter, site)?,
            CallStrategy::MathFunction(function) => emit_math(function, emitter, site)?,
            CallStrategy::StringFunction(function) => emit_string(function, emitter, site)?,
            CallStrategy::TimePoint(function) => return emit_time_point(function, emitter),
        };
        Ok(result.with_nullable(site.any_nullable()))
    }

    fn check_arity(&self, site: &CallSite<'_>) -> Result<(), CodegenError> {
        let arity = self.arity();
        if arity.contains(&site.arity()) && site.signature.arity() == site.arity() {
            return Ok(());
        }
        let expected = if arity.contains(&site.arity()) {
            site.signature.arity()
        } else {
            *arity.start()
        };
        Err(CodegenError::ArityMismatch {
            operator: site.operator.name().to_string(),
            expected,
            found: site.arity(),
        })
    }
}

/// Push every operand, widening each to its signature root.
fn load_operands(emitter: &mut CodeEmitter<'_>, site: &CallSite<'_>) -> Result<(), CodegenError> {
    for (index, operand) in site.operands.iter().enumerate() {
        emitter.emit_operand(operand)?;
        if let Some(target) = site.target_root(index)
            && target.is_numeric_primitive()
        {
            emitter.emit_widen(operand.root(), target)?;
        }
    }
    Ok(())
}

fn unsupported(site: &CallSite<'_>, root: TypeRoot) -> CodegenError {
    CodegenError::UnsupportedOperand {
        operator: site.operator.name().to_string(),
        root,
    }
}

/// The single root both operands of a binary call are matched on.
fn binary_root(site: &CallSite<'_>) -> Result<TypeRoot, CodegenError> {
    match site.signature.roots() {
        [left, right] if left == right => Ok(*left),
        [_, right] => Err(unsupported(site, *right)),
        _ => Err(CodegenError::ArityMismatch {
            operator: site.operator.name().to_string(),
            expected: 2,
            found: site.signature.arity(),
        }),
    }
}

fn arithmetic_opcode(op: ArithmeticOp, root: TypeRoot) -> Option<OpCode> {
    use ArithmeticOp::*;
    let opcode = match (root, op) {
        (TypeRoot::Integer, Add) => OpCode::AddI32,
        (TypeRoot::Integer, Subtract) => OpCode::SubI32,
        (TypeRoot::Integer, Multiply) => OpCode::MulI32,
        (TypeRoot::Integer, Divide) => OpCode::DivI32,
        (TypeRoot::Integer, Modulo) => OpCode::ModI32,
        (TypeRoot::BigInt, Add) => OpCode::AddI64,
        (TypeRoot::BigInt, Subtract) => OpCode::SubI64,
        (TypeRoot::BigInt, Multiply) => OpCode::MulI64,
        (TypeRoot::BigInt, Divide) => OpCode::DivI64,
        (TypeRoot::BigInt, Modulo) => OpCode::ModI64,
        (TypeRoot::Float, Add) => OpCode::AddF32,
        (TypeRoot::Float, Subtract) => OpCode::SubF32,
        (TypeRoot::Float, Multiply) => OpCode::MulF32,
        (TypeRoot::Float, Divide) => OpCode::DivF32,
        (TypeRoot::Double, Add) => OpCode::AddF64,
        (TypeRoot::Double, Subtract) => OpCode::SubF64,
        (TypeRoot::Double, Multiply) => OpCode::MulF64,
        (TypeRoot::Double, Divide) => OpCode::DivF64,
        _ => return None,
    };
    Some(opcode)
}

fn decimal_opcode(op: ArithmeticOp) -> OpCode {
    match op {
        ArithmeticOp::Add => OpCode::AddDec,
        ArithmeticOp::Subtract => OpCode::SubDec,
        ArithmeticOp::Multiply => OpCode::MulDec,
        ArithmeticOp::Divide => OpCode::DivDec,
        ArithmeticOp::Modulo => OpCode::ModDec,
    }
}

fn emit_arithmetic(
    op: ArithmeticOp,
    emitter: &mut CodeEmitter<'_>,
    site: &CallSite<'_>,
) -> Result<LogicalType, CodegenError> {
    let root = binary_root(site)?;
    let opcode = arithmetic_opcode(op, root).ok_or_else(|| unsupported(site, root))?;
    load_operands(emitter, site)?;
    emitter.emit(opcode);
    Ok(LogicalType::simple(root))
}

fn emit_decimal_arithmetic(
    op: ArithmeticOp,
    emitter: &mut CodeEmitter<'_>,
    site: &CallSite<'_>,
) -> Result<LogicalType, CodegenError> {
    let [left, right] = site.operands else {
        return Err(CodegenError::ArityMismatch {
            operator: site.operator.name().to_string(),
            expected: 2,
            found: site.arity(),
        });
    };
    let parts = |ty: &LogicalType| ty.decimal_parts().ok_or_else(|| unsupported(site, ty.root()));
    let (left, right) = (parts(&left.ty)?, parts(&right.ty)?);

    let result = decimal::result_type(op, left, right)?;
    let (precision, scale) = result
        .decimal_parts()
        .ok_or_else(|| unsupported(site, result.root()))?;
    load_operands(emitter, site)?;
    emitter.emit_bytes(decimal_opcode(op), precision, scale);
    Ok(result)
}

fn emit_negate(
    emitter: &mut CodeEmitter<'_>,
    site: &CallSite<'_>,
) -> Result<LogicalType, CodegenError> {
    let root = site.target_root(0).ok_or_else(|| unsupported(site, TypeRoot::Null))?;
    let (opcode, result) = match root {
        TypeRoot::Integer => (OpCode::NegI32, LogicalType::int()),
        TypeRoot::BigInt => (OpCode::NegI64, LogicalType::bigint()),
        TypeRoot::Float => (OpCode::NegF32, LogicalType::float()),
        TypeRoot::Double => (OpCode::NegF64, LogicalType::double()),
        TypeRoot::Decimal => (OpCode::NegDec, site.operands[0].ty.clone()),
        other => return Err(unsupported(site, other)),
    };
    load_operands(emitter, site)?;
    emitter.emit(opcode);
    Ok(result)
}

fn emit_comparison(
    op: ComparisonOp,
    emitter: &mut CodeEmitter<'_>,
    site: &CallSite<'_>,
) -> Result<LogicalType, CodegenError> {
    let root = binary_root(site)?;
    let class = ValueClass::of(root).ok_or_else(|| unsupported(site, root))?;
    load_operands(emitter, site)?;
    emitter.emit_bytes(OpCode::Compare, op.kind().into(), class.into());
    Ok(LogicalType::boolean())
}

fn emit_builtin_call(
    emitter: &mut CodeEmitter<'_>,
    site: &CallSite<'_>,
) -> Result<(), CodegenError> {
    load_operands(emitter, site)?;
    // Arity is at most 2 here, checked against `CallStrategy::arity`.
    emitter.emit_call_builtin(site.operator, site.arity() as u8)
}

fn emit_math(
    function: MathFunction,
    emitter: &mut CodeEmitter<'_>,
    site: &CallSite<'_>,
) -> Result<LogicalType, CodegenError> {
    let result = match function {
        MathFunction::Abs => match site.target_root(0) {
            Some(TypeRoot::Decimal) => site.operands[0].ty.clone(),
            Some(root) if root.is_numeric_primitive() => LogicalType::simple(root),
            Some(root) => return Err(unsupported(site, root)),
            None => return Err(unsupported(site, TypeRoot::Null)),
        },
        _ => LogicalType::double(),
    };
    emit_builtin_call(emitter, site)?;
    Ok(result)
}

/// CHAR stays CHAR only if every input is CHAR.
fn concat_type(site: &CallSite<'_>) -> Result<LogicalType, CodegenError> {
    let mut length: u32 = 0;
    let mut all_char = true;
    for operand in site.operands {
        let len = operand.ty.length().ok_or_else(|| unsupported(site, operand.root()))?;
        length = length.saturating_add(len).min(MAX_LENGTH);
        all_char &= operand.root() == TypeRoot::Char;
    }
    let ty = if all_char {
        LogicalType::char(length)?
    } else {
        LogicalType::varchar(length)?
    };
    Ok(ty)
}

fn emit_string(
    function: StringFunction,
    emitter: &mut CodeEmitter<'_>,
    site: &CallSite<'_>,
) -> Result<LogicalType, CodegenError> {
    let result = match function {
        StringFunction::Upper | StringFunction::Lower => site.operands[0].ty.clone(),
        StringFunction::CharLength => LogicalType::int(),
        StringFunction::Concat => concat_type(site)?,
    };
    emit_builtin_call(emitter, site)?;
    Ok(result)
}

/// How often the instruction reads the execution context.
///
/// Batch jobs read once at query start, except CURRENT_ROW_TIMESTAMP which
/// always reflects the row being processed. Streaming jobs read row-stable
/// functions once per record and everything else per call.
pub fn eval_scope(function: &ContextFunction) -> EvalScope {
    if function.time_point == TimePoint::CurrentRowTimestamp {
        EvalScope::PerCall
    } else if !function.is_streaming() {
        EvalScope::PerQuery
    } else if function.row_stable {
        EvalScope::PerRecord
    } else {
        EvalScope::PerCall
    }
}

/// Precision of the timestamps produced by context functions.
const TIME_POINT_PRECISION: u8 = 3;

/// Result type of a context function. Never nullable.
pub fn time_point_type(point: TimePoint) -> Result<LogicalType, CodegenError> {
    let ty = match point {
        TimePoint::LocalTime | TimePoint::CurrentTime => LogicalType::time(0)?,
        TimePoint::LocalTimestamp => LogicalType::timestamp(TIME_POINT_PRECISION)?,
        TimePoint::CurrentTimestamp | TimePoint::Now | TimePoint::CurrentRowTimestamp => {
            LogicalType::timestamp_ltz(TIME_POINT_PRECISION)?
        }
        TimePoint::CurrentDate => LogicalType::date(),
    };
    Ok(ty.not_null())
}

fn emit_time_point(
    function: ContextFunction,
    emitter: &mut CodeEmitter<'_>,
) -> Result<LogicalType, CodegenError> {
    let result = time_point_type(function.time_point)?;
    emitter.emit_bytes(
        OpCode::TimePoint,
        time_point_code(function.time_point),
        eval_scope(&function).into(),
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::{Constant, ConstantPool};
    use crate::site::{Literal, Operand};
    use sqlcall_core::{OperatorId, operators};
    use sqlcall_registry::{ExecutionMode, Signature};

    fn emit(
        strategy: CallStrategy,
        operator: OperatorId,
        signature: &[TypeRoot],
        operands: &[Operand],
    ) -> (Result<LogicalType, CodegenError>, crate::bytecode::BytecodeChunk, ConstantPool) {
        let signature = Signature::new(signature.to_vec());
        let mut constants = ConstantPool::new();
        let mut emitter = CodeEmitter::new(&mut constants);
        let site = CallSite {
            operator,
            signature: &signature,
            operands,
        };
        let result = strategy.emit(&mut emitter, &site);
        let chunk = emitter.finish();
        (result, chunk, constants)
    }

    fn slot(index: usize, ty: LogicalType) -> Operand {
        Operand::slot(index, ty)
    }

    #[test]
    fn integer_addition() {
        let (result, chunk, _) = emit(
            CallStrategy::Arithmetic(ArithmeticOp::Add),
            operators::PLUS,
            &[TypeRoot::Integer, TypeRoot::Integer],
            &[slot(0, LogicalType::int().not_null()), slot(1, LogicalType::int().not_null())],
        );
        assert_eq!(result.unwrap(), LogicalType::int().not_null());
        chunk.assert_opcodes(&[OpCode::LoadOperand, OpCode::LoadOperand, OpCode::AddI32]);
    }

    #[test]
    fn widened_operands_get_conversions() {
        let (result, chunk, _) = emit(
            CallStrategy::Arithmetic(ArithmeticOp::Multiply),
            operators::MULTIPLY,
            &[TypeRoot::Double, TypeRoot::Double],
            &[slot(0, LogicalType::smallint()), slot(1, LogicalType::double().not_null())],
        );
        assert_eq!(result.unwrap(), LogicalType::double());
        chunk.assert_opcodes(&[
            OpCode::LoadOperand,
            OpCode::I16toF64,
            OpCode::LoadOperand,
            OpCode::MulF64,
        ]);
    }

    #[test]
    fn float_modulo_is_unsupported() {
        let (result, _, _) = emit(
            CallStrategy::Arithmetic(ArithmeticOp::Modulo),
            operators::MOD,
            &[TypeRoot::Float, TypeRoot::Float],
            &[slot(0, LogicalType::float()), slot(1, LogicalType::float())],
        );
        assert_eq!(
            result,
            Err(CodegenError::UnsupportedOperand {
                operator: "MOD".to_string(),
                root: TypeRoot::Float,
            })
        );
    }

    #[test]
    fn decimal_division_derives_result_type() {
        let (result, chunk, _) = emit(
            CallStrategy::DecimalArithmetic(ArithmeticOp::Divide),
            operators::DIVIDE,
            &[TypeRoot::Decimal, TypeRoot::Decimal],
            &[
                slot(0, LogicalType::decimal(10, 2).unwrap().not_null()),
                slot(1, LogicalType::decimal(5, 3).unwrap()),
            ],
        );
        assert_eq!(result.unwrap(), LogicalType::decimal(19, 8).unwrap());
        chunk.assert_opcodes(&[OpCode::LoadOperand, OpCode::LoadOperand, OpCode::DivDec]);
        assert_eq!(&chunk.code()[5..], &[19, 8]);
    }

    #[test]
    fn negate_keeps_decimal_parameters() {
        let ty = LogicalType::decimal(12, 4).unwrap().not_null();
        let (result, chunk, _) = emit(
            CallStrategy::Negate,
            operators::UNARY_MINUS,
            &[TypeRoot::Decimal],
            &[slot(0, ty.clone())],
        );
        assert_eq!(result.unwrap(), ty);
        chunk.assert_opcodes(&[OpCode::LoadOperand, OpCode::NegDec]);
    }

    #[test]
    fn negate_widened_integer() {
        let (result, chunk, _) = emit(
            CallStrategy::Negate,
            operators::UNARY_MINUS,
            &[TypeRoot::Integer],
            &[slot(0, LogicalType::tinyint().not_null())],
        );
        assert_eq!(result.unwrap(), LogicalType::int().not_null());
        chunk.assert_opcodes(&[OpCode::LoadOperand, OpCode::I8toI32, OpCode::NegI32]);
    }

    #[test]
    fn comparison_yields_boolean() {
        let (result, chunk, _) = emit(
            CallStrategy::Comparison(ComparisonOp::LessThan),
            operators::LESS_THAN,
            &[TypeRoot::BigInt, TypeRoot::BigInt],
            &[slot(0, LogicalType::int().not_null()), slot(1, LogicalType::bigint())],
        );
        assert_eq!(result.unwrap(), LogicalType::boolean());
        chunk.assert_opcodes(&[
            OpCode::LoadOperand,
            OpCode::I32toI64,
            OpCode::LoadOperand,
            OpCode::Compare,
        ]);
        let code = chunk.code();
        assert_eq!(code[code.len() - 2], u8::from(CompareKind::Lt));
        assert_eq!(code[code.len() - 1], u8::from(ValueClass::I64));
    }

    #[test]
    fn math_function_calls_builtin() {
        let (result, chunk, constants) = emit(
            CallStrategy::MathFunction(MathFunction::Log),
            operators::LOG,
            &[TypeRoot::Double],
            &[slot(0, LogicalType::int().not_null())],
        );
        assert_eq!(result.unwrap(), LogicalType::double().not_null());
        chunk.assert_opcodes(&[OpCode::LoadOperand, OpCode::I32toF64, OpCode::CallBuiltin]);
        assert_eq!(constants.constants(), &[Constant::Operator(operators::LOG.as_u64())]);
    }

    #[test]
    fn log_with_base() {
        let (result, chunk, _) = emit(
            CallStrategy::MathFunction(MathFunction::Log),
            operators::LOG,
            &[TypeRoot::Double, TypeRoot::Double],
            &[
                Operand::literal(Literal::Double(2.0), LogicalType::double().not_null()),
                slot(0, LogicalType::double()),
            ],
        );
        assert_eq!(result.unwrap(), LogicalType::double());
        chunk.assert_opcodes(&[OpCode::Constant, OpCode::LoadOperand, OpCode::CallBuiltin]);
        assert_eq!(chunk.code().last(), Some(&2));
    }

    #[test]
    fn abs_keeps_operand_type() {
        let ty = LogicalType::decimal(7, 2).unwrap();
        let (result, _, _) = emit(
            CallStrategy::MathFunction(MathFunction::Abs),
            operators::ABS,
            &[TypeRoot::Decimal],
            &[slot(0, ty.clone())],
        );
        assert_eq!(result.unwrap(), ty);
    }

    #[test]
    fn concat_sums_lengths() {
        let (result, _, _) = emit(
            CallStrategy::StringFunction(StringFunction::Concat),
            operators::CONCAT,
            &[TypeRoot::Char, TypeRoot::Varchar],
            &[
                slot(0, LogicalType::char(3).unwrap().not_null()),
                slot(1, LogicalType::varchar(10).unwrap().not_null()),
            ],
        );
        assert_eq!(result.unwrap(), LogicalType::varchar(13).unwrap().not_null());

        let (result, _, _) = emit(
            CallStrategy::StringFunction(StringFunction::Concat),
            operators::CONCAT,
            &[TypeRoot::Char, TypeRoot::Char],
            &[
                slot(0, LogicalType::char(3).unwrap()),
                slot(1, LogicalType::char(4).unwrap().not_null()),
            ],
        );
        assert_eq!(result.unwrap(), LogicalType::char(7).unwrap());
    }

    #[test]
    fn concat_length_saturates() {
        let (result, _, _) = emit(
            CallStrategy::StringFunction(StringFunction::Concat),
            operators::CONCAT,
            &[TypeRoot::Varchar, TypeRoot::Varchar],
            &[
                slot(0, LogicalType::varchar(MAX_LENGTH).unwrap()),
                slot(1, LogicalType::varchar(MAX_LENGTH).unwrap()),
            ],
        );
        assert_eq!(result.unwrap().length(), Some(MAX_LENGTH));
    }

    #[test]
    fn char_length_is_integer() {
        let (result, _, _) = emit(
            CallStrategy::StringFunction(StringFunction::CharLength),
            operators::CHAR_LENGTH,
            &[TypeRoot::Varchar],
            &[slot(0, LogicalType::varchar(20).unwrap().not_null())],
        );
        assert_eq!(result.unwrap(), LogicalType::int().not_null());
    }

    #[test]
    fn arity_is_checked() {
        let (result, chunk, _) = emit(
            CallStrategy::Negate,
            operators::UNARY_MINUS,
            &[TypeRoot::Integer, TypeRoot::Integer],
            &[slot(0, LogicalType::int()), slot(1, LogicalType::int())],
        );
        assert_eq!(
            result,
            Err(CodegenError::ArityMismatch {
                operator: "-".to_string(),
                expected: 1,
                found: 2,
            })
        );
        assert!(chunk.is_empty());
    }

    fn context(op: OperatorId, mode: ExecutionMode) -> ContextFunction {
        ContextFunction::resolve(op, mode).unwrap()
    }

    #[test]
    fn streaming_scopes() {
        let stable = context(operators::LOCALTIMESTAMP, ExecutionMode::Streaming);
        assert_eq!(eval_scope(&stable), EvalScope::PerRecord);
        let fresh = context(operators::CURRENT_TIMESTAMP, ExecutionMode::Streaming);
        assert_eq!(eval_scope(&fresh), EvalScope::PerCall);
    }

    #[test]
    fn batch_scopes() {
        for op in [operators::LOCALTIME, operators::NOW, operators::CURRENT_DATE] {
            assert_eq!(eval_scope(&context(op, ExecutionMode::Batch)), EvalScope::PerQuery);
        }
        let row = context(operators::CURRENT_ROW_TIMESTAMP, ExecutionMode::Batch);
        assert_eq!(eval_scope(&row), EvalScope::PerCall);
    }

    #[test]
    fn time_point_result_types() {
        assert_eq!(
            time_point_type(TimePoint::LocalTime).unwrap(),
            LogicalType::time(0).unwrap().not_null()
        );
        assert_eq!(
            time_point_type(TimePoint::LocalTimestamp).unwrap(),
            LogicalType::timestamp(3).unwrap().not_null()
        );
        assert_eq!(
            time_point_type(TimePoint::Now).unwrap(),
            LogicalType::timestamp_ltz(3).unwrap().not_null()
        );
        assert_eq!(
            time_point_type(TimePoint::CurrentDate).unwrap(),
            LogicalType::date().not_null()
        );
    }

    #[test]
    fn time_point_emission() {
        let function = context(operators::LOCALTIME, ExecutionMode::Streaming);
        let strategy = CallStrategy::TimePoint(function);
        let (result, chunk, _) = emit(strategy, operators::LOCALTIME, &[], &[]);
        assert!(!result.unwrap().is_nullable());
        chunk.assert_opcodes(&[OpCode::TimePoint]);
        assert_eq!(
            chunk.code(),
            &[
                u8::from(OpCode::TimePoint),
                time_point_code(TimePoint::LocalTime),
                u8::from(EvalScope::PerRecord)
            ]
        );
    }

    #[test]
    fn context_strategy_wraps_function() {
        let function = context(operators::NOW, ExecutionMode::Batch);
        assert_eq!(
            CallStrategy::for_context_function(function),
            CallStrategy::TimePoint(function)
        );
    }
}
