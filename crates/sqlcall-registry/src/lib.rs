//! Operator call-resolution registry.
//!
//! Maps an operator identity and the roots of its operand types to the code
//! generation strategy that handles the call.
//!
//! ## Modules
//!
//! - [`promotion`]: implicit numeric widening rules
//! - [`signature`]: operand signatures and registry keys
//! - [`registry`]: construction and storage
//! - [`resolver`]: exact and approximate matching
//! - [`context`]: execution-context functions specialized by execution mode
//! - [`catalog`]: catalog providers that populate a registry
//! - [`config`]: registry configuration
//!
//! Strategies are an opaque type parameter. The registry stores and returns
//! them, and only produces one itself for context functions through
//! [`ContextStrategy`].

pub mod catalog;
pub mod config;
pub mod context;
pub mod promotion;
pub mod registry;
pub mod resolver;
pub mod signature;

pub use catalog::{CatalogEntry, CatalogProvider};
pub use config::{DuplicatePolicy, ExecutionMode, RegistryConfig};
pub use context::{ContextFunction, ContextStrategy, TimePoint};
pub use promotion::{is_promotable, promotion_targets};
pub use registry::{CallRegistry, RegistryBuilder};
pub use resolver::{MatchKind, Resolution, position_accepts, signature_accepts};
pub use signature::{KeyRef, RegistryKey, Signature};
