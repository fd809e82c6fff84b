//! Bytecode emitter for call sites.
//!
//! ```
//! use sqlcall_codegen::bytecode::{ConstantPool, OpCode};
//! use sqlcall_codegen::emit::CodeEmitter;
//! use sqlcall_core::TypeRoot;
//!
//! let mut constants = ConstantPool::new();
//! let mut emitter = CodeEmitter::new(&mut constants);
//! emitter.emit_load_operand(0).unwrap();
//! emitter.emit_widen(TypeRoot::Integer, TypeRoot::Double).unwrap();
//!
//! let chunk = emitter.finish();
//! chunk.assert_opcodes(&[OpCode::LoadOperand, OpCode::I32toF64]);
//! ```

use sqlcall_core::{CodegenError, OperatorId, TypeRoot};

use crate::bytecode::{BytecodeChunk, Constant, ConstantPool, OpCode};
use crate::site::{Literal, Operand, OperandSource};

/// Largest addressable constant index (`ConstantWide` operand).
pub const MAX_CONSTANTS: usize = u16::MAX as usize + 1;

/// Emits the instructions of one call site.
///
/// Each emitter produces one chunk; the constant pool is shared by every
/// call site of a session.
pub struct CodeEmitter<'pool> {
    chunk: BytecodeChunk,
    constants: &'pool mut ConstantPool,
}

impl<'pool> CodeEmitter<'pool> {
    pub fn new(constants: &'pool mut ConstantPool) -> Self {
        Self {
            chunk: BytecodeChunk::new(),
            constants,
        }
    }

    // ==========================================================================
    // Basic Emission
    // ==========================================================================

    /// Emit a single opcode with no operands.
    pub fn emit(&mut self, op: OpCode) {
        self.chunk.write_op(op);
    }

    /// Emit opcode with one 8-bit operand.
    pub fn emit_byte(&mut self, op: OpCode, byte: u8) {
        self.chunk.write_op(op);
        self.chunk.write_byte(byte);
    }

    /// Emit opcode with two 8-bit operands.
    pub fn emit_bytes(&mut self, op: OpCode, first: u8, second: u8) {
        self.chunk.write_op(op);
        self.chunk.write_byte(first);
        self.chunk.write_byte(second);
    }

    /// Emit opcode with one 16-bit operand.
    pub fn emit_u16(&mut self, op: OpCode, value: u16) {
        self.chunk.write_op(op);
        self.chunk.write_u16(value);
    }

    // ==========================================================================
    // Constants
    // ==========================================================================

    /// Emit a constant load.
    ///
    /// Uses a narrow (8-bit) or wide (16-bit) index based on the pool index.
    pub fn emit_constant(&mut self, constant: Constant) -> Result<(), CodegenError> {
        let index = self.add_constant(constant)?;
        match u8::try_from(index) {
            Ok(narrow) => self.emit_byte(OpCode::Constant, narrow),
            Err(_) => self.emit_u16(OpCode::ConstantWide, index),
        }
        Ok(())
    }

    pub fn emit_int(&mut self, value: i64) -> Result<(), CodegenError> {
        self.emit_constant(Constant::Int(value))
    }

    pub fn emit_f64(&mut self, value: f64) -> Result<(), CodegenError> {
        self.emit_constant(Constant::Float64(value))
    }

    pub fn emit_string(&mut self, value: &str) -> Result<(), CodegenError> {
        self.emit_constant(Constant::StringData(value.to_string()))
    }

    pub fn emit_null(&mut self) {
        self.emit(OpCode::PushNull);
    }

    // A full pool rejects new constants without growing.
    fn add_constant(&mut self, constant: Constant) -> Result<u16, CodegenError> {
        let overflow = CodegenError::ConstantPoolOverflow { max: MAX_CONSTANTS };
        let index = match self.constants.find(&constant) {
            Some(index) => index,
            None if self.constants.len() >= MAX_CONSTANTS => return Err(overflow),
            None => self.constants.add(constant),
        };
        u16::try_from(index).map_err(|_| overflow)
    }

    // ==========================================================================
    // Operands
    // ==========================================================================

    /// Push an operand slot of the enclosing expression.
    pub fn emit_load_operand(&mut self, slot: usize) -> Result<(), CodegenError> {
        let narrow = u8::try_from(slot).map_err(|_| CodegenError::OperandSlotOverflow { slot })?;
        self.emit_byte(OpCode::LoadOperand, narrow);
        Ok(())
    }

    /// Push an operand, whatever its source.
    pub fn emit_operand(&mut self, operand: &Operand) -> Result<(), CodegenError> {
        match &operand.source {
            OperandSource::Slot(slot) => self.emit_load_operand(*slot),
            OperandSource::Literal(Literal::Int(v)) => self.emit_int(*v),
            OperandSource::Literal(Literal::Double(v)) => self.emit_f64(*v),
            OperandSource::Literal(Literal::String(v)) => self.emit_string(v),
            OperandSource::Literal(Literal::Null) => {
                self.emit_null();
                Ok(())
            }
        }
    }

    // ==========================================================================
    // Conversions
    // ==========================================================================

    /// Widen the value on top of the stack from `from` to `to`.
    ///
    /// Emits nothing when the roots are equal.
    pub fn emit_widen(&mut self, from: TypeRoot, to: TypeRoot) -> Result<(), CodegenError> {
        if from == to {
            return Ok(());
        }
        let op = OpCode::widening(from, to)
            .ok_or(CodegenError::UnsupportedConversion { from, to })?;
        self.emit(op);
        Ok(())
    }

    // ==========================================================================
    // Calls
    // ==========================================================================

    /// Call a runtime builtin with `argc` arguments already on the stack.
    pub fn emit_call_builtin(
        &mut self,
        operator: OperatorId,
        argc: u8,
    ) -> Result<(), CodegenError> {
        let index = self.add_constant(Constant::Operator(operator.as_u64()))?;
        self.chunk.write_op(OpCode::CallBuiltin);
        self.chunk.write_u16(index);
        self.chunk.write_byte(argc);
        Ok(())
    }

    // ==========================================================================
    // Finalization
    // ==========================================================================

    pub fn constants(&self) -> &ConstantPool {
        self.constants
    }

    pub fn finish(self) -> BytecodeChunk {
        self.chunk
    }
}
