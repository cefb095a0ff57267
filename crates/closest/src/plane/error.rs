//! Error type shared by the solver, the preprocessor, and the brute-force oracle.

use std::fmt;

/// Errors surfaced by the closest-pair solver and its oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClosestPairError {
    /// Fewer than two points: there is no pair to return.
    InsufficientPoints { found: usize },
    /// A coordinate is NaN or infinite.
    NonFinitePoint { index: usize },
    /// Oracle range ends past the slice.
    RangeOutOfBounds { right: usize, len: usize },
    /// Rejected `SolverCfg`.
    InvalidConfig { reason: String },
}

impl ClosestPairError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ClosestPairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { found } => {
                write!(f, "need at least 2 points, got {found}")
            }
            Self::NonFinitePoint { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            Self::RangeOutOfBounds { right, len } => {
                write!(f, "range end {right} is out of bounds for {len} points")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid solver config: {reason}"),
        }
    }
}

impl std::error::Error for ClosestPairError {}
