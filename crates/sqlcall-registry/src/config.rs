//! Registry configuration.
//!
//! Read once at startup and fixed for the lifetime of the registry it builds.
//!
//! ```toml
//! execution-mode = "batch"
//! duplicate-keys = "overwrite"
//! ```

use std::fmt;

use serde::Deserialize;

/// Whether the surrounding job runs over an unbounded or a bounded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    /// Continuous execution over an unbounded input.
    #[default]
    Streaming,
    /// Bounded execution that runs to completion.
    Batch,
}

impl ExecutionMode {
    #[inline]
    pub fn is_streaming(self) -> bool {
        matches!(self, ExecutionMode::Streaming)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Streaming => f.write_str("streaming"),
            ExecutionMode::Batch => f.write_str("batch"),
        }
    }
}

/// What construction does when a catalog registers the same key twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later entry replaces the earlier one and keeps its position.
    Overwrite,
    /// Construction fails on the first duplicate key.
    #[default]
    Reject,
}

/// Settings that shape a [`CallRegistry`](crate::CallRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegistryConfig {
    pub execution_mode: ExecutionMode,
    pub duplicate_keys: DuplicatePolicy,
}

impl RegistryConfig {
    pub fn streaming() -> Self {
        Self::default()
    }

    pub fn batch() -> Self {
        Self {
            execution_mode: ExecutionMode::Batch,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }
}
