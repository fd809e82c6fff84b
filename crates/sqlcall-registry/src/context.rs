//! Context functions.
//!
//! Zero-argument operators whose value comes from the execution context
//! rather than from operands ("current point in time" family). Each one is
//! specialized at registry construction by two independent flags:
//!
//! - `row_stable`: the value is held invariant across all evaluations within
//!   one record (LOCALTIME, LOCALTIMESTAMP) instead of being re-evaluated on
//!   every call.
//! - `mode`: whether the job runs in streaming or batch execution mode.
//!
//! The set of context functions is closed. Registering any other operator as
//! a context function is a fatal construction error.

use sqlcall_core::{OperatorId, RegistryError, operators};

use crate::config::ExecutionMode;

/// Which point in time a context function yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePoint {
    LocalTime,
    LocalTimestamp,
    CurrentTime,
    CurrentTimestamp,
    CurrentDate,
    Now,
    CurrentRowTimestamp,
}

/// The known context functions: operator, time point, row stability.
static KNOWN: [(OperatorId, TimePoint, bool); 7] = [
    (operators::LOCALTIME, TimePoint::LocalTime, true),
    (operators::LOCALTIMESTAMP, TimePoint::LocalTimestamp, true),
    (operators::CURRENT_TIME, TimePoint::CurrentTime, false),
    (operators::CURRENT_TIMESTAMP, TimePoint::CurrentTimestamp, false),
    (operators::CURRENT_DATE, TimePoint::CurrentDate, false),
    (operators::NOW, TimePoint::Now, false),
    (operators::CURRENT_ROW_TIMESTAMP, TimePoint::CurrentRowTimestamp, false),
];

impl TimePoint {
    /// Operator identity this time point is registered under.
    pub fn operator(self) -> OperatorId {
        match self {
            TimePoint::LocalTime => operators::LOCALTIME,
            TimePoint::LocalTimestamp => operators::LOCALTIMESTAMP,
            TimePoint::CurrentTime => operators::CURRENT_TIME,
            TimePoint::CurrentTimestamp => operators::CURRENT_TIMESTAMP,
            TimePoint::CurrentDate => operators::CURRENT_DATE,
            TimePoint::Now => operators::NOW,
            TimePoint::CurrentRowTimestamp => operators::CURRENT_ROW_TIMESTAMP,
        }
    }
}

/// A context function resolved against the execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextFunction {
    pub operator: OperatorId,
    pub time_point: TimePoint,
    /// Value is held invariant within one record.
    pub row_stable: bool,
    pub mode: ExecutionMode,
}

impl ContextFunction {
    /// Resolve `operator` to its context function for `mode`.
    pub fn resolve(operator: OperatorId, mode: ExecutionMode) -> Result<Self, RegistryError> {
        KNOWN
            .iter()
            .find(|(known, _, _)| *known == operator)
            .map(|&(operator, time_point, row_stable)| ContextFunction {
                operator,
                time_point,
                row_stable,
                mode,
            })
            .ok_or_else(|| RegistryError::UnknownContextFunction {
                name: operator.name().to_string(),
            })
    }

    /// All known context function operators.
    pub fn known_operators() -> impl Iterator<Item = OperatorId> {
        KNOWN.iter().map(|(op, _, _)| *op)
    }

    #[inline]
    pub fn is_streaming(&self) -> bool {
        self.mode.is_streaming()
    }
}

/// Strategy types that can represent a resolved context function.
///
/// The registry never looks inside strategies; this is the one place it
/// needs to produce one itself.
pub trait ContextStrategy: Sized {
    fn for_context_function(function: ContextFunction) -> Self;
}
