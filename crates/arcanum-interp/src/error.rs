//! Interpolation failure taxonomy.

use dashu::integer::IBig;
use thiserror::Error;

/// Errors raised while assembling a point set or interpolating it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpolateError {
    /// The threshold was below 1; a polynomial needs at least one point.
    #[error("invalid threshold {0}: at least 1 point is required")]
    InvalidThreshold(usize),

    /// Fewer points were supplied than the threshold requires.
    #[error("insufficient points: have {have}, need {need}")]
    InsufficientPoints {
        /// Number of points available.
        have: usize,
        /// Threshold `k` that was requested.
        need: usize,
    },

    /// Two points share the same `x` coordinate, which would put a zero
    /// denominator into the Lagrange basis.
    #[error("duplicate x coordinate {0}")]
    DuplicateX(IBig),
}
