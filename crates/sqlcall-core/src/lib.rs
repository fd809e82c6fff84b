//! Shared vocabulary for the sqlcall crates.
//!
//! - [`TypeRoot`] and [`TypeFamily`]: coarse type classification used for matching
//! - [`LogicalType`]: a full SQL type with parameters and nullability
//! - [`OperatorId`]: deterministic identity of a function or operator
//! - [`operators`]: well-known operator identities
//! - Error types for each phase

mod error;
mod logical_type;
mod operator_id;
mod type_root;

pub use error::{CodegenError, RegistryError, TypeError};
pub use logical_type::{LogicalType, TypeParams};
pub use operator_id::{OperatorId, OperatorKind, hash_constants, operators};
pub use type_root::{TypeFamily, TypeRoot};
