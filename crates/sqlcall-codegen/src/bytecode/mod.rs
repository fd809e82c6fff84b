//! Bytecode for compiled call sites.
//!
//! - [`OpCode`]: instruction set
//! - [`BytecodeChunk`]: instructions of one call site
//! - [`ConstantPool`]: deduplicated constants shared across call sites

mod chunk;
mod constant;
mod opcode;
mod operand;

pub use chunk::BytecodeChunk;
pub use constant::{Constant, ConstantPool};
pub use opcode::OpCode;
pub use operand::{CompareKind, EvalScope, ValueClass, time_point_code};
