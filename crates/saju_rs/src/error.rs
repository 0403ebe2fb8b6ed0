//! Error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_chart::ChartError;
use saju_time::TimeError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuRsError {
    /// `init` has not been called.
    NotInitialized,
    /// `init` was called more than once.
    AlreadyInitialized,
    Time(TimeError),
    Chart(ChartError),
}

impl Display for SajuRsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "solar term table not initialized; call init() first"),
            Self::AlreadyInitialized => write!(f, "solar term table already initialized"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Chart(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SajuRsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Chart(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SajuRsError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ChartError> for SajuRsError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}
