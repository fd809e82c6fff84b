//! Operator call resolution and code generation for SQL expressions.
//!
//! Resolves each operator call in an expression to the strategy that
//! generates its code, based on the operator and the root types of its
//! operands, and compiles the call to bytecode.
//!
//! ## Crates
//!
//! - `sqlcall-core`: logical types, operator identities, errors
//! - `sqlcall-registry`: promotion rules, registry construction and resolution
//! - `sqlcall-codegen`: strategies, the standard catalog, bytecode
//!
//! This crate ties them together behind [`Context`] and [`Session`].

pub mod config;
pub mod context;
pub mod error;

pub use config::{Config, ConfigError};
pub use context::{Context, Session};
pub use error::{Result, SqlCallError};

pub use sqlcall_codegen::{
    CallStrategy, CompiledCall, ConstantPool, Literal, OpCode, Operand, StandardCatalog,
};
pub use sqlcall_core::{LogicalType, OperatorId, TypeRoot, operators};
pub use sqlcall_registry::{
    CallRegistry, CatalogEntry, CatalogProvider, DuplicatePolicy, ExecutionMode, MatchKind,
    RegistryConfig,
};
