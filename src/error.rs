//! Top-level error type.
//!
//! Each crate reports errors for its own phase. [`SqlCallError`] unifies them
//! for callers that drive several phases through the facade.

use thiserror::Error;

use sqlcall_core::{CodegenError, RegistryError, TypeError};

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, SqlCallError>;

#[derive(Debug, Error)]
pub enum SqlCallError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("registry construction failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("code generation failed: {0}")]
    Codegen(#[from] CodegenError),

    #[error("invalid type: {0}")]
    Type(#[from] TypeError),
}

impl SqlCallError {
    /// True for errors that abort registry construction.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SqlCallError::Config(_) | SqlCallError::Registry(_))
    }
}
