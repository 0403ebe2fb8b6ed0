//! Error types for symbol parsing and pillar construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from stem/branch symbol handling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaseError {
    /// Character is neither a stem nor a branch.
    UnknownSymbol(char),
    /// Character is not one of the 10 stems.
    NotAStem(char),
    /// Character is not one of the 12 branches.
    NotABranch(char),
    /// Stem/branch pair is not one of the 60 cycle combinations.
    InvalidPillar(String),
    /// Gender string not recognised.
    UnknownGender(String),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol(c) => write!(f, "unknown stem/branch symbol: '{c}'"),
            Self::NotAStem(c) => write!(f, "not a heavenly stem: '{c}'"),
            Self::NotABranch(c) => write!(f, "not an earthly branch: '{c}'"),
            Self::InvalidPillar(s) => write!(f, "invalid pillar: {s}"),
            Self::UnknownGender(s) => write!(f, "unknown gender: {s}"),
        }
    }
}

impl Error for BaseError {}
