//! Bytecode chunk for one compiled call site.

use super::OpCode;

/// The instructions of one call site.
///
/// Constants live in the session's [`ConstantPool`](super::ConstantPool), not
/// per chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytecodeChunk {
    code: Vec<u8>,
}

impl BytecodeChunk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            code: Vec::with_capacity(capacity),
        }
    }

    pub fn write_op(&mut self, op: OpCode) {
        self.code.push(op.into());
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.code.push(byte);
    }

    /// Write a 16-bit operand (big-endian).
    pub fn write_u16(&mut self, value: u16) {
        self.code.extend_from_slice(&value.to_be_bytes());
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn read_byte(&self, offset: usize) -> Option<u8> {
        self.code.get(offset).copied()
    }

    /// Read a u16 at the given offset (big-endian).
    pub fn read_u16(&self, offset: usize) -> Option<u16> {
        let bytes = self.code.get(offset..offset + 2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_op(&self, offset: usize) -> Option<OpCode> {
        self.code.get(offset).and_then(|&b| OpCode::from_u8(b))
    }

    /// Extract all opcodes from the chunk, skipping operands.
    pub fn opcodes(&self) -> Vec<OpCode> {
        self.instructions().map(|(_, op)| op).collect()
    }

    /// Iterate `(offset, opcode)` pairs.
    ///
    /// Stops at the first byte that does not decode.
    pub fn instructions(&self) -> impl Iterator<Item = (usize, OpCode)> + '_ {
        let mut offset = 0;
        std::iter::from_fn(move || {
            let op = self.read_op(offset)?;
            let at = offset;
            offset += 1 + op.operand_size();
            Some((at, op))
        })
    }

    /// Check that this chunk contains exactly the given opcode sequence.
    ///
    /// Operand values are ignored. Meant for tests and doctests.
    ///
    /// # Panics
    ///
    /// Panics if the decoded opcodes differ from `expected`.
    #[track_caller]
    pub fn assert_opcodes(&self, expected: &[OpCode]) {
        let actual = self.opcodes();
        assert_eq!(actual, expected, "bytecode mismatch");
    }
}
