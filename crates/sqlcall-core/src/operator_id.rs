//! Deterministic operator identity.
//!
//! [`OperatorId`] is a 64-bit identity for a named SQL function or operator.
//! The display name alone is not an identity: binary `-` and prefix `-` print
//! the same but are distinct operators, and so are two overloads that a
//! catalog tags apart. Identities are computed with XXHash64 in a `const fn`,
//! so well-known operators are plain constants.
//!
//! # Examples
//!
//! ```
//! use sqlcall_core::{OperatorId, OperatorKind};
//!
//! let minus = OperatorId::binary("-");
//! let negate = OperatorId::prefix("-");
//! assert_eq!(minus.name(), negate.name());
//! assert_ne!(minus, negate);
//!
//! let interval_minus = OperatorId::tagged(OperatorKind::Binary, "-", "interval");
//! assert_ne!(minus, interval_minus);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use xxhash_rust::const_xxh64::xxh64;

/// Domain-specific mixing constants.
///
/// Each operator kind gets its own domain so that a function and an operator
/// with the same spelling never collide.
pub mod hash_constants {
    /// Separator used when folding a tag into an identity
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for named functions
    pub const FUNCTION: u64 = 0x5ea77ffbcdf5f302;

    /// Domain marker for binary operators
    pub const BINARY: u64 = 0x3e9f5d2a8c7b1403;

    /// Domain marker for prefix operators
    pub const PREFIX: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for overload tags
    pub const TAG: u64 = 0x2fac10b63a6cc57c;
}

/// Syntactic kind of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Named function call, e.g. `LOG(x)`.
    Function,
    /// Infix operator, e.g. `a + b`.
    Binary,
    /// Prefix operator, e.g. `-a`.
    Prefix,
}

impl OperatorKind {
    const fn domain(self) -> u64 {
        match self {
            OperatorKind::Function => hash_constants::FUNCTION,
            OperatorKind::Binary => hash_constants::BINARY,
            OperatorKind::Prefix => hash_constants::PREFIX,
        }
    }
}

/// Identity of a SQL function or operator.
///
/// Equality, ordering and hashing use only the identity hash. The name and
/// kind are carried for diagnostics.
#[derive(Clone, Copy)]
pub struct OperatorId {
    hash: u64,
    name: &'static str,
    kind: OperatorKind,
}

impl OperatorId {
    /// Create an untagged identity.
    #[inline]
    pub const fn new(kind: OperatorKind, name: &'static str) -> Self {
        Self::tagged(kind, name, "")
    }

    /// Create an identity distinguished by an overload tag.
    ///
    /// An empty tag yields the same identity as [`OperatorId::new`].
    pub const fn tagged(kind: OperatorKind, name: &'static str, tag: &str) -> Self {
        let mut hash = kind.domain() ^ xxh64(name.as_bytes(), 0);
        if !tag.is_empty() {
            hash = hash
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(hash_constants::TAG ^ xxh64(tag.as_bytes(), 0));
        }
        Self { hash, name, kind }
    }

    #[inline]
    pub const fn function(name: &'static str) -> Self {
        Self::new(OperatorKind::Function, name)
    }

    #[inline]
    pub const fn binary(symbol: &'static str) -> Self {
        Self::new(OperatorKind::Binary, symbol)
    }

    #[inline]
    pub const fn prefix(symbol: &'static str) -> Self {
        Self::new(OperatorKind::Prefix, symbol)
    }

    /// The identity hash.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.hash
    }

    /// Display name; not unique.
    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn kind(self) -> OperatorKind {
        self.kind
    }
}

impl PartialEq for OperatorId {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for OperatorId {}

impl Hash for OperatorId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl PartialOrd for OperatorId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OperatorId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl fmt::Debug for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperatorId({} {:?}, {:#018x})", self.name, self.kind, self.hash)
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Well-known operator identities.
pub mod operators {
    use super::OperatorId;

    pub const PLUS: OperatorId = OperatorId::binary("+");
    pub const MINUS: OperatorId = OperatorId::binary("-");
    pub const MULTIPLY: OperatorId = OperatorId::binary("*");
    pub const DIVIDE: OperatorId = OperatorId::binary("/");
    pub const MOD: OperatorId = OperatorId::function("MOD");
    pub const UNARY_MINUS: OperatorId = OperatorId::prefix("-");

    pub const EQUALS: OperatorId = OperatorId::binary("=");
    pub const NOT_EQUALS: OperatorId = OperatorId::binary("<>");
    pub const LESS_THAN: OperatorId = OperatorId::binary("<");
    pub const LESS_THAN_OR_EQUAL: OperatorId = OperatorId::binary("<=");
    pub const GREATER_THAN: OperatorId = OperatorId::binary(">");
    pub const GREATER_THAN_OR_EQUAL: OperatorId = OperatorId::binary(">=");

    pub const LOG: OperatorId = OperatorId::function("LOG");
    pub const LOG10: OperatorId = OperatorId::function("LOG10");
    pub const LN: OperatorId = OperatorId::function("LN");
    pub const EXP: OperatorId = OperatorId::function("EXP");
    pub const POWER: OperatorId = OperatorId::function("POWER");
    pub const SQRT: OperatorId = OperatorId::function("SQRT");
    pub const ABS: OperatorId = OperatorId::function("ABS");

    pub const UPPER: OperatorId = OperatorId::function("UPPER");
    pub const LOWER: OperatorId = OperatorId::function("LOWER");
    pub const CHAR_LENGTH: OperatorId = OperatorId::function("CHAR_LENGTH");
    pub const CONCAT: OperatorId = OperatorId::function("CONCAT");

    // Context functions
    pub const LOCALTIME: OperatorId = OperatorId::function("LOCALTIME");
    pub const LOCALTIMESTAMP: OperatorId = OperatorId::function("LOCALTIMESTAMP");
    pub const CURRENT_TIME: OperatorId = OperatorId::function("CURRENT_TIME");
    pub const CURRENT_TIMESTAMP: OperatorId = OperatorId::function("CURRENT_TIMESTAMP");
    pub const CURRENT_DATE: OperatorId = OperatorId::function("CURRENT_DATE");
    pub const NOW: OperatorId = OperatorId::function("NOW");
    pub const CURRENT_ROW_TIMESTAMP: OperatorId = OperatorId::function("CURRENT_ROW_TIMESTAMP");
}
