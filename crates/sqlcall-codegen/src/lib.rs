//! Call-site code generation.
//!
//! Turns a resolved operator call into stack-machine bytecode and its result
//! type.
//!
//! ## Modules
//!
//! - [`bytecode`]: instruction set, chunks and the constant pool
//! - [`emit`]: low-level instruction emitter
//! - [`site`]: operands and call sites
//! - [`strategy`]: per operator family emission ([`CallStrategy`])
//! - [`decimal`]: DECIMAL arithmetic result types
//! - [`catalog`]: the standard operator catalog
//! - [`call`]: resolve-then-emit entry point ([`CallCompiler`])

pub mod bytecode;
pub mod call;
pub mod catalog;
pub mod decimal;
pub mod emit;
pub mod site;
pub mod strategy;

pub use bytecode::{BytecodeChunk, Constant, ConstantPool, OpCode};
pub use call::{CallCompiler, CompiledCall};
pub use catalog::StandardCatalog;
pub use emit::CodeEmitter;
pub use site::{CallSite, Literal, Operand, OperandSource};
pub use strategy::{ArithmeticOp, CallStrategy, ComparisonOp, MathFunction, StringFunction};
