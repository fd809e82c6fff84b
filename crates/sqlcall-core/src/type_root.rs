//! Coarse type classification used for call matching.
//!
//! A [`TypeRoot`] identifies a logical type without its parameters: every
//! `DECIMAL(p, s)` shares the root [`TypeRoot::Decimal`], every `VARCHAR(n)`
//! shares [`TypeRoot::Varchar`]. Call signatures are expressed in roots only.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Families a type root belongs to.
    ///
    /// A root can belong to several families, e.g. `INTEGER` is
    /// `NUMERIC | INTEGER_NUMERIC | EXACT_NUMERIC`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFamily: u16 {
        const CHARACTER_STRING = 1 << 0;
        const BINARY_STRING = 1 << 1;
        const NUMERIC = 1 << 2;
        const INTEGER_NUMERIC = 1 << 3;
        const EXACT_NUMERIC = 1 << 4;
        const APPROXIMATE_NUMERIC = 1 << 5;
        const DATETIME = 1 << 6;
        const TIME = 1 << 7;
        const TIMESTAMP = 1 << 8;
    }
}

/// Root classification of a logical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeRoot {
    Char,
    Varchar,
    Boolean,
    Binary,
    Varbinary,
    Decimal,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Double,
    Date,
    TimeWithoutTimeZone,
    TimestampWithoutTimeZone,
    TimestampWithTimeZone,
    TimestampWithLocalTimeZone,
    IntervalYearMonth,
    IntervalDayTime,
    Array,
    Multiset,
    Map,
    Row,
    Raw,
    Symbol,
    Null,
}

impl TypeRoot {
    /// Every root, in declaration order.
    pub const ALL: [TypeRoot; 26] = [
        TypeRoot::Char,
        TypeRoot::Varchar,
        TypeRoot::Boolean,
        TypeRoot::Binary,
        TypeRoot::Varbinary,
        TypeRoot::Decimal,
        TypeRoot::TinyInt,
        TypeRoot::SmallInt,
        TypeRoot::Integer,
        TypeRoot::BigInt,
        TypeRoot::Float,
        TypeRoot::Double,
        TypeRoot::Date,
        TypeRoot::TimeWithoutTimeZone,
        TypeRoot::TimestampWithoutTimeZone,
        TypeRoot::TimestampWithTimeZone,
        TypeRoot::TimestampWithLocalTimeZone,
        TypeRoot::IntervalYearMonth,
        TypeRoot::IntervalDayTime,
        TypeRoot::Array,
        TypeRoot::Multiset,
        TypeRoot::Map,
        TypeRoot::Row,
        TypeRoot::Raw,
        TypeRoot::Symbol,
        TypeRoot::Null,
    ];

    /// The six roots that take part in implicit numeric promotion.
    pub const NUMERIC_PRIMITIVES: [TypeRoot; 6] = [
        TypeRoot::TinyInt,
        TypeRoot::SmallInt,
        TypeRoot::Integer,
        TypeRoot::BigInt,
        TypeRoot::Float,
        TypeRoot::Double,
    ];

    /// Families this root belongs to. Empty for roots outside every family.
    pub const fn families(self) -> TypeFamily {
        use TypeFamily as F;
        match self {
            TypeRoot::Char | TypeRoot::Varchar => F::CHARACTER_STRING,
            TypeRoot::Binary | TypeRoot::Varbinary => F::BINARY_STRING,
            TypeRoot::Decimal => F::NUMERIC.union(F::EXACT_NUMERIC),
            TypeRoot::TinyInt | TypeRoot::SmallInt | TypeRoot::Integer | TypeRoot::BigInt => {
                F::NUMERIC.union(F::INTEGER_NUMERIC).union(F::EXACT_NUMERIC)
            }
            TypeRoot::Float | TypeRoot::Double => F::NUMERIC.union(F::APPROXIMATE_NUMERIC),
            TypeRoot::Date => F::DATETIME,
            TypeRoot::TimeWithoutTimeZone => F::DATETIME.union(F::TIME),
            TypeRoot::TimestampWithoutTimeZone
            | TypeRoot::TimestampWithTimeZone
            | TypeRoot::TimestampWithLocalTimeZone => F::DATETIME.union(F::TIMESTAMP),
            _ => F::empty(),
        }
    }

    /// Check whether this root belongs to `family`.
    #[inline]
    pub const fn is_in(self, family: TypeFamily) -> bool {
        self.families().contains(family)
    }

    /// Check whether this root belongs to any family in `families`.
    #[inline]
    pub const fn is_any(self, families: TypeFamily) -> bool {
        self.families().intersects(families)
    }

    /// Roots belonging to `family`, in declaration order.
    pub fn in_family(family: TypeFamily) -> impl Iterator<Item = TypeRoot> {
        Self::ALL.into_iter().filter(move |root| root.is_in(family))
    }

    /// True for TINYINT, SMALLINT, INTEGER, BIGINT, FLOAT and DOUBLE.
    #[inline]
    pub const fn is_numeric_primitive(self) -> bool {
        self.is_any(TypeFamily::INTEGER_NUMERIC.union(TypeFamily::APPROXIMATE_NUMERIC))
    }

    #[inline]
    pub const fn is_decimal(self) -> bool {
        matches!(self, TypeRoot::Decimal)
    }

    /// SQL name of this root.
    pub const fn name(self) -> &'static str {
        match self {
            TypeRoot::Char => "CHAR",
            TypeRoot::Varchar => "VARCHAR",
            TypeRoot::Boolean => "BOOLEAN",
            TypeRoot::Binary => "BINARY",
            TypeRoot::Varbinary => "VARBINARY",
            TypeRoot::Decimal => "DECIMAL",
            TypeRoot::TinyInt => "TINYINT",
            TypeRoot::SmallInt => "SMALLINT",
            TypeRoot::Integer => "INTEGER",
            TypeRoot::BigInt => "BIGINT",
            TypeRoot::Float => "FLOAT",
            TypeRoot::Double => "DOUBLE",
            TypeRoot::Date => "DATE",
            TypeRoot::TimeWithoutTimeZone => "TIME",
            TypeRoot::TimestampWithoutTimeZone => "TIMESTAMP",
            TypeRoot::TimestampWithTimeZone => "TIMESTAMP WITH TIME ZONE",
            TypeRoot::TimestampWithLocalTimeZone => "TIMESTAMP_LTZ",
            TypeRoot::IntervalYearMonth => "INTERVAL YEAR TO MONTH",
            TypeRoot::IntervalDayTime => "INTERVAL DAY TO SECOND",
            TypeRoot::Array => "ARRAY",
            TypeRoot::Multiset => "MULTISET",
            TypeRoot::Map => "MAP",
            TypeRoot::Row => "ROW",
            TypeRoot::Raw => "RAW",
            TypeRoot::Symbol => "SYMBOL",
            TypeRoot::Null => "NULL",
        }
    }
}

impl fmt::Display for TypeRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
