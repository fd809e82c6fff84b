//! LogicalType - a complete SQL type with parameters and nullability.
//!
//! This is distinct from [`TypeRoot`], which only classifies the type. Call
//! matching works on roots; code generation needs the full type to derive
//! result precision and nullability.
//!
//! # Example
//!
//! ```
//! use sqlcall_core::{LogicalType, TypeRoot};
//!
//! let price = LogicalType::decimal(10, 2).unwrap().not_null();
//! assert_eq!(price.root(), TypeRoot::Decimal);
//! assert_eq!(price.to_string(), "DECIMAL(10, 2) NOT NULL");
//! ```

use std::fmt::{self, Display, Formatter};

use crate::{TypeError, TypeRoot};

/// Parameters attached to a logical type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeParams {
    /// No parameters (INTEGER, DATE, BOOLEAN, ...).
    None,
    /// Character or byte length.
    Length(u32),
    /// Decimal precision and scale.
    Decimal { precision: u8, scale: u8 },
    /// Fractional-second precision of time and timestamp types.
    Precision(u8),
}

/// A logical SQL type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalType {
    root: TypeRoot,
    nullable: bool,
    params: TypeParams,
}

impl LogicalType {
    pub const MIN_DECIMAL_PRECISION: u8 = 1;
    pub const MAX_DECIMAL_PRECISION: u8 = 38;
    pub const DEFAULT_DECIMAL_PRECISION: u8 = 10;
    pub const MAX_TIME_PRECISION: u8 = 9;
    pub const DEFAULT_TIME_PRECISION: u8 = 0;
    pub const DEFAULT_TIMESTAMP_PRECISION: u8 = 6;

    fn with_params(root: TypeRoot, params: TypeParams) -> Self {
        Self {
            root,
            nullable: true,
            params,
        }
    }

    /// Create a nullable type from its root, using default parameters.
    ///
    /// Parameterized roots get their SQL defaults: `DECIMAL(10, 0)`,
    /// `CHAR(1)`, `VARCHAR(1)`, `TIME(0)`, `TIMESTAMP(6)`. Other roots carry
    /// no parameters.
    pub fn simple(root: TypeRoot) -> Self {
        let params = match root {
            TypeRoot::Char | TypeRoot::Varchar | TypeRoot::Binary | TypeRoot::Varbinary => {
                TypeParams::Length(1)
            }
            TypeRoot::Decimal => TypeParams::Decimal {
                precision: Self::DEFAULT_DECIMAL_PRECISION,
                scale: 0,
            },
            TypeRoot::TimeWithoutTimeZone => TypeParams::Precision(Self::DEFAULT_TIME_PRECISION),
            TypeRoot::TimestampWithoutTimeZone
            | TypeRoot::TimestampWithTimeZone
            | TypeRoot::TimestampWithLocalTimeZone => {
                TypeParams::Precision(Self::DEFAULT_TIMESTAMP_PRECISION)
            }
            _ => TypeParams::None,
        };
        Self::with_params(root, params)
    }

    pub fn boolean() -> Self {
        Self::simple(TypeRoot::Boolean)
    }

    pub fn tinyint() -> Self {
        Self::simple(TypeRoot::TinyInt)
    }

    pub fn smallint() -> Self {
        Self::simple(TypeRoot::SmallInt)
    }

    pub fn int() -> Self {
        Self::simple(TypeRoot::Integer)
    }

    pub fn bigint() -> Self {
        Self::simple(TypeRoot::BigInt)
    }

    pub fn float() -> Self {
        Self::simple(TypeRoot::Float)
    }

    pub fn double() -> Self {
        Self::simple(TypeRoot::Double)
    }

    pub fn date() -> Self {
        Self::simple(TypeRoot::Date)
    }

    pub fn char(length: u32) -> Result<Self, TypeError> {
        Self::sized(TypeRoot::Char, length)
    }

    pub fn varchar(length: u32) -> Result<Self, TypeError> {
        Self::sized(TypeRoot::Varchar, length)
    }

    fn sized(root: TypeRoot, length: u32) -> Result<Self, TypeError> {
        if length == 0 {
            return Err(TypeError::InvalidLength { root, length });
        }
        Ok(Self::with_params(root, TypeParams::Length(length)))
    }

    /// Create a `DECIMAL(precision, scale)` type.
    ///
    /// Precision must lie in `1..=38` and scale in `0..=precision`.
    pub fn decimal(precision: u8, scale: u8) -> Result<Self, TypeError> {
        if !(Self::MIN_DECIMAL_PRECISION..=Self::MAX_DECIMAL_PRECISION).contains(&precision) {
            return Err(TypeError::InvalidDecimalPrecision { precision });
        }
        if scale > precision {
            return Err(TypeError::InvalidDecimalScale { precision, scale });
        }
        Ok(Self::with_params(
            TypeRoot::Decimal,
            TypeParams::Decimal { precision, scale },
        ))
    }

    pub fn time(precision: u8) -> Result<Self, TypeError> {
        Self::fractional(TypeRoot::TimeWithoutTimeZone, precision)
    }

    pub fn timestamp(precision: u8) -> Result<Self, TypeError> {
        Self::fractional(TypeRoot::TimestampWithoutTimeZone, precision)
    }

    pub fn timestamp_ltz(precision: u8) -> Result<Self, TypeError> {
        Self::fractional(TypeRoot::TimestampWithLocalTimeZone, precision)
    }

    fn fractional(root: TypeRoot, precision: u8) -> Result<Self, TypeError> {
        if precision > Self::MAX_TIME_PRECISION {
            return Err(TypeError::InvalidTimePrecision { root, precision });
        }
        Ok(Self::with_params(root, TypeParams::Precision(precision)))
    }

    /// Return a copy with the given nullability.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Return a `NOT NULL` copy of this type.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.with_nullable(false)
    }

    #[inline]
    pub fn root(&self) -> TypeRoot {
        self.root
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn params(&self) -> &TypeParams {
        &self.params
    }

    /// Precision and scale, if this is a decimal.
    pub fn decimal_parts(&self) -> Option<(u8, u8)> {
        match self.params {
            TypeParams::Decimal { precision, scale } => Some((precision, scale)),
            _ => None,
        }
    }

    /// Fractional-second precision, if this is a time or timestamp.
    pub fn time_precision(&self) -> Option<u8> {
        match self.params {
            TypeParams::Precision(p) => Some(p),
            _ => None,
        }
    }

    pub fn length(&self) -> Option<u32> {
        match self.params {
            TypeParams::Length(len) => Some(len),
            _ => None,
        }
    }
}

impl Display for LogicalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.params {
            TypeParams::None => write!(f, "{}", self.root)?,
            TypeParams::Length(len) => write!(f, "{}({})", self.root, len)?,
            TypeParams::Decimal { precision, scale } => {
                write!(f, "DECIMAL({}, {})", precision, scale)?
            }
            TypeParams::Precision(p) => match self.root {
                TypeRoot::TimestampWithTimeZone => write!(f, "TIMESTAMP({}) WITH TIME ZONE", p)?,
                _ => write!(f, "{}({})", self.root, p)?,
            },
        }
        if !self.nullable {
            write!(f, " NOT NULL")?;
        }
        Ok(())
    }
}
