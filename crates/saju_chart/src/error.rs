//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::BaseError;
use saju_time::TimeError;

/// Errors from pillar calculation and chart assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid input date or missing solar term data.
    Time(TimeError),
    /// Invalid stem/branch input.
    Base(BaseError),
    /// No solar-term interval contains the instant (strict mode only).
    UnresolvedMonthInterval { year: i32 },
    /// The boundary needed for the decade start age is outside the table.
    MissingAdjacentTerm,
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Base(e) => write!(f, "symbol error: {e}"),
            Self::UnresolvedMonthInterval { year } => {
                write!(f, "no solar-term month interval found in sexagenary year {year}")
            }
            Self::MissingAdjacentTerm => {
                write!(f, "adjacent solar term needed for the decade start age is unavailable")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Base(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<BaseError> for ChartError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}
