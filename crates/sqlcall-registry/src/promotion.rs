//! Implicit numeric promotion rules.
//!
//! Answers whether a value of one numeric root may be widened into another
//! for the purpose of call matching. The relation only covers the six numeric
//! primitives and only ever widens:
//!
//! ```text
//! TINYINT  -> SMALLINT, INTEGER, BIGINT, FLOAT, DOUBLE
//! SMALLINT -> INTEGER, BIGINT, FLOAT, DOUBLE
//! INTEGER  -> BIGINT, FLOAT, DOUBLE
//! BIGINT   -> FLOAT, DOUBLE
//! FLOAT    -> DOUBLE
//! ```
//!
//! It is a strict partial order: irreflexive, antisymmetric and acyclic.
//! DECIMAL is not part of it.

use sqlcall_core::TypeRoot;

/// Check whether `from` can be implicitly widened to `to`.
///
/// Returns `false` for identical roots and for any non-numeric input.
#[inline]
pub fn is_promotable(from: TypeRoot, to: TypeRoot) -> bool {
    use TypeRoot::*;

    matches!(
        (from, to),
        (TinyInt, SmallInt | Integer | BigInt | Float | Double)
            | (SmallInt, Integer | BigInt | Float | Double)
            | (Integer, BigInt | Float | Double)
            | (BigInt, Float | Double)
            | (Float, Double)
    )
}

/// All roots that `from` promotes to, narrowest first.
pub fn promotion_targets(from: TypeRoot) -> impl Iterator<Item = TypeRoot> {
    TypeRoot::NUMERIC_PRIMITIVES
        .into_iter()
        .filter(move |&to| is_promotable(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use TypeRoot::*;

    #[test]
    fn tinyint_widens_to_everything_numeric() {
        let targets: Vec<_> = promotion_targets(TinyInt).collect();
        assert_eq!(targets, vec![SmallInt, Integer, BigInt, Float, Double]);
    }

    #[test]
    fn bigint_only_widens_to_floats() {
        let targets: Vec<_> = promotion_targets(BigInt).collect();
        assert_eq!(targets, vec![Float, Double]);
    }

    #[test]
    fn double_is_the_top() {
        assert_eq!(promotion_targets(Double).count(), 0);
    }

    #[test]
    fn table_has_fifteen_pairs() {
        let count = TypeRoot::NUMERIC_PRIMITIVES
            .iter()
            .map(|&from| promotion_targets(from).count())
            .sum::<usize>();
        assert_eq!(count, 15);
    }

    #[test]
    fn irreflexive() {
        for root in TypeRoot::ALL {
            assert!(!is_promotable(root, root), "{root} promotes to itself");
        }
    }

    #[test]
    fn antisymmetric() {
        for a in TypeRoot::NUMERIC_PRIMITIVES {
            for b in TypeRoot::NUMERIC_PRIMITIVES {
                assert!(
                    !(is_promotable(a, b) && is_promotable(b, a)),
                    "{a} and {b} promote both ways"
                );
            }
        }
    }

    #[test]
    fn acyclic() {
        // Depth-first walk from every root; no path may return to its origin.
        fn reaches(from: TypeRoot, target: TypeRoot, depth: usize) -> bool {
            if depth > TypeRoot::NUMERIC_PRIMITIVES.len() {
                return true;
            }
            promotion_targets(from).any(|next| next == target || reaches(next, target, depth + 1))
        }

        for root in TypeRoot::NUMERIC_PRIMITIVES {
            assert!(!reaches(root, root, 0), "cycle through {root}");
        }
    }

    #[test]
    fn transitive() {
        for a in TypeRoot::NUMERIC_PRIMITIVES {
            for b in promotion_targets(a) {
                for c in promotion_targets(b) {
                    assert!(is_promotable(a, c), "{a} -> {b} -> {c} but not {a} -> {c}");
                }
            }
        }
    }

    #[test]
    fn non_numeric_never_promotes() {
        for root in TypeRoot::ALL {
            if root.is_numeric_primitive() {
                continue;
            }
            for other in TypeRoot::ALL {
                assert!(!is_promotable(root, other));
                assert!(!is_promotable(other, root));
            }
        }
    }

    #[test]
    fn narrowing_is_rejected() {
        assert!(!is_promotable(Double, Float));
        assert!(!is_promotable(BigInt, Integer));
        assert!(!is_promotable(Float, BigInt));
    }

    #[test]
    fn decimal_is_outside_the_table() {
        assert!(!is_promotable(Integer, Decimal));
        assert!(!is_promotable(Decimal, Double));
    }

    #[test]
    fn stable_across_calls() {
        for a in TypeRoot::ALL {
            for b in TypeRoot::ALL {
                assert_eq!(is_promotable(a, b), is_promotable(a, b));
            }
        }
    }
}
