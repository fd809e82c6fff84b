//! The standard operator catalog.
//!
//! Registration order matters: numeric overloads are listed narrow to wide so
//! an operand that only matches approximately resolves to the narrowest
//! signature it promotes to.

use sqlcall_core::{OperatorId, TypeFamily, TypeRoot, operators};
use sqlcall_registry::{CatalogEntry, CatalogProvider, ContextFunction};

use crate::strategy::{ArithmeticOp, CallStrategy, ComparisonOp, MathFunction, StringFunction};

/// Numeric roots with arithmetic overloads, narrow to wide.
const ARITHMETIC_ROOTS: [TypeRoot; 4] = [
    TypeRoot::Integer,
    TypeRoot::BigInt,
    TypeRoot::Float,
    TypeRoot::Double,
];

/// Non-numeric roots with comparison overloads.
fn comparable_roots() -> impl Iterator<Item = TypeRoot> {
    let families = TypeFamily::CHARACTER_STRING | TypeFamily::DATETIME;
    std::iter::once(TypeRoot::Boolean)
        .chain(TypeRoot::ALL.into_iter().filter(move |root| root.is_any(families)))
}

fn string_roots() -> impl Iterator<Item = TypeRoot> {
    TypeRoot::in_family(TypeFamily::CHARACTER_STRING)
}

const ARITHMETIC: [(OperatorId, ArithmeticOp); 5] = [
    (operators::PLUS, ArithmeticOp::Add),
    (operators::MINUS, ArithmeticOp::Subtract),
    (operators::MULTIPLY, ArithmeticOp::Multiply),
    (operators::DIVIDE, ArithmeticOp::Divide),
    (operators::MOD, ArithmeticOp::Modulo),
];

const COMPARISON: [(OperatorId, ComparisonOp); 6] = [
    (operators::EQUALS, ComparisonOp::Equals),
    (operators::NOT_EQUALS, ComparisonOp::NotEquals),
    (operators::LESS_THAN, ComparisonOp::LessThan),
    (operators::LESS_THAN_OR_EQUAL, ComparisonOp::LessThanOrEqual),
    (operators::GREATER_THAN, ComparisonOp::GreaterThan),
    (operators::GREATER_THAN_OR_EQUAL, ComparisonOp::GreaterThanOrEqual),
];

/// Single-argument math functions over DOUBLE and DECIMAL.
const UNARY_MATH: [(OperatorId, MathFunction); 5] = [
    (operators::LOG, MathFunction::Log),
    (operators::LOG10, MathFunction::Log10),
    (operators::LN, MathFunction::Ln),
    (operators::EXP, MathFunction::Exp),
    (operators::SQRT, MathFunction::Sqrt),
];

/// The built-in operator catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl StandardCatalog {
    fn arithmetic(entries: &mut Vec<CatalogEntry<CallStrategy>>) {
        for (op, arith) in ARITHMETIC {
            for root in ARITHMETIC_ROOTS {
                // MOD has no approximate numeric overloads.
                if arith == ArithmeticOp::Modulo && root.is_in(TypeFamily::APPROXIMATE_NUMERIC) {
                    continue;
                }
                entries.push(CatalogEntry::new(op, [root, root], CallStrategy::Arithmetic(arith)));
            }
            entries.push(CatalogEntry::new(
                op,
                [TypeRoot::Decimal, TypeRoot::Decimal],
                CallStrategy::DecimalArithmetic(arith),
            ));
        }

        for root in ARITHMETIC_ROOTS.into_iter().chain([TypeRoot::Decimal]) {
            entries.push(CatalogEntry::new(operators::UNARY_MINUS, [root], CallStrategy::Negate));
        }
    }

    fn comparison(entries: &mut Vec<CatalogEntry<CallStrategy>>) {
        for (op, cmp) in COMPARISON {
            let roots = ARITHMETIC_ROOTS
                .into_iter()
                .chain([TypeRoot::Decimal])
                .chain(comparable_roots());
            for root in roots {
                entries.push(CatalogEntry::new(op, [root, root], CallStrategy::Comparison(cmp)));
            }
        }
    }

    fn math(entries: &mut Vec<CatalogEntry<CallStrategy>>) {
        for (op, function) in UNARY_MATH {
            for root in [TypeRoot::Double, TypeRoot::Decimal] {
                entries.push(CatalogEntry::new(op, [root], CallStrategy::MathFunction(function)));
            }
        }

        let binary = [
            (operators::LOG, MathFunction::Log),
            (operators::POWER, MathFunction::Power),
        ];
        for (op, function) in binary {
            for root in [TypeRoot::Double, TypeRoot::Decimal] {
                let strategy = CallStrategy::MathFunction(function);
                entries.push(CatalogEntry::new(op, [root, root], strategy));
            }
        }

        let abs = CallStrategy::MathFunction(MathFunction::Abs);
        for root in ARITHMETIC_ROOTS.into_iter().chain([TypeRoot::Decimal]) {
            entries.push(CatalogEntry::new(operators::ABS, [root], abs));
        }
    }

    fn strings(entries: &mut Vec<CatalogEntry<CallStrategy>>) {
        let unary = [
            (operators::UPPER, StringFunction::Upper),
            (operators::LOWER, StringFunction::Lower),
            (operators::CHAR_LENGTH, StringFunction::CharLength),
        ];
        for (op, function) in unary {
            for root in string_roots() {
                entries.push(CatalogEntry::new(op, [root], CallStrategy::StringFunction(function)));
            }
        }

        let concat = CallStrategy::StringFunction(StringFunction::Concat);
        for left in string_roots() {
            for right in string_roots() {
                entries.push(CatalogEntry::new(operators::CONCAT, [left, right], concat));
            }
        }
    }
}

impl CatalogProvider<CallStrategy> for StandardCatalog {
    fn entries(&self) -> Vec<CatalogEntry<CallStrategy>> {
        let mut entries = Vec::with_capacity(256);
        Self::arithmetic(&mut entries);
        Self::comparison(&mut entries);
        Self::math(&mut entries);
        Self::strings(&mut entries);
        entries
    }

    fn context_functions(&self) -> Vec<OperatorId> {
        ContextFunction::known_operators().collect()
    }
}
