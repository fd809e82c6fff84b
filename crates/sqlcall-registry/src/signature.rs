//! Operand signatures and registry keys.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::Equivalent;
use sqlcall_core::{LogicalType, OperatorId, TypeRoot};

/// Ordered operand roots of a call. Length is the arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Signature(Box<[TypeRoot]>);

impl Signature {
    /// The zero-arity signature.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(roots: impl Into<Box<[TypeRoot]>>) -> Self {
        Self(roots.into())
    }

    /// Reduce concrete operand types to their roots.
    pub fn of(types: &[LogicalType]) -> Self {
        types.iter().map(LogicalType::root).collect()
    }

    #[inline]
    pub fn roots(&self) -> &[TypeRoot] {
        &self.0
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<TypeRoot> for Signature {
    fn from_iter<I: IntoIterator<Item = TypeRoot>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[TypeRoot; N]> for Signature {
    fn from(roots: [TypeRoot; N]) -> Self {
        Self(Box::new(roots))
    }
}

impl From<&[TypeRoot]> for Signature {
    fn from(roots: &[TypeRoot]) -> Self {
        Self(roots.into())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_roots(f, &self.0)
    }
}

pub(crate) fn write_roots(f: &mut fmt::Formatter<'_>, roots: &[TypeRoot]) -> fmt::Result {
    for (i, root) in roots.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", root)?;
    }
    Ok(())
}

/// Exact key of a registry entry: operator identity plus operand signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryKey {
    pub operator: OperatorId,
    pub signature: Signature,
}

impl RegistryKey {
    pub fn new(operator: OperatorId, signature: impl Into<Signature>) -> Self {
        Self {
            operator,
            signature: signature.into(),
        }
    }
}

// Hashes the same way as `KeyRef` so borrowed lookups hit the same bucket.
impl Hash for RegistryKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.operator.hash(state);
        self.signature.roots().hash(state);
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operator)?;
        write_roots(f, self.signature.roots())?;
        f.write_str(")")
    }
}

/// Borrowed form of [`RegistryKey`] for allocation-free exact lookups.
///
/// Usable against any `IndexMap` keyed by [`RegistryKey`].
#[derive(Debug, Clone, Copy)]
pub struct KeyRef<'a> {
    pub operator: OperatorId,
    pub roots: &'a [TypeRoot],
}

impl<'a> KeyRef<'a> {
    pub fn new(operator: OperatorId, roots: &'a [TypeRoot]) -> Self {
        Self { operator, roots }
    }

    pub fn into_key(self) -> RegistryKey {
        RegistryKey::new(self.operator, self.roots)
    }
}

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.operator.hash(state);
        self.roots.hash(state);
    }
}

impl Equivalent<RegistryKey> for KeyRef<'_> {
    fn equivalent(&self, key: &RegistryKey) -> bool {
        self.operator == key.operator && self.roots == key.signature.roots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxBuildHasher;
    use sqlcall_core::operators;
    use std::hash::BuildHasher;

    #[test]
    fn signature_of_reduces_to_roots() {
        let types = [
            LogicalType::decimal(10, 2).unwrap(),
            LogicalType::varchar(5).unwrap(),
        ];
        let sig = Signature::of(&types);
        assert_eq!(sig.roots(), &[TypeRoot::Decimal, TypeRoot::Varchar]);
        assert_eq!(sig.arity(), 2);
    }

    #[test]
    fn order_matters() {
        let a = Signature::from([TypeRoot::Integer, TypeRoot::Double]);
        let b = Signature::from([TypeRoot::Double, TypeRoot::Integer]);
        assert_ne!(a, b);
    }

    #[test]
    fn key_ref_hashes_like_owned_key() {
        let roots = [TypeRoot::Double, TypeRoot::Double];
        let owned = RegistryKey::new(operators::POWER, roots);
        let borrowed = KeyRef::new(operators::POWER, &roots);
        let hasher = FxBuildHasher;
        assert_eq!(hasher.hash_one(&owned), hasher.hash_one(borrowed));
        assert!(borrowed.equivalent(&owned));
        assert_eq!(borrowed.into_key(), owned);
    }

    #[test]
    fn display() {
        let key = RegistryKey::new(operators::LOG, [TypeRoot::Double, TypeRoot::Decimal]);
        assert_eq!(key.to_string(), "LOG(DOUBLE, DECIMAL)");
        assert_eq!(RegistryKey::new(operators::NOW, Signature::empty()).to_string(), "NOW()");
    }
}
