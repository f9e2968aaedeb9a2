//! Record-level glue: decode an instance's shares and interpolate them.

use dashu::integer::IBig;
use thiserror::Error;

use arcanum_interp::{constant_term, Exact, InterpolateError, PointSet};
use arcanum_radix::{decode, RadixError};

/// One share of an instance: an `x` coordinate paired with its value,
/// encoded as a digit string in the share's own base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    /// The share's `x` coordinate.
    pub x: IBig,
    /// The base the value string is written in (2..=36).
    pub base: u32,
    /// The base-encoded value string.
    pub value: String,
}

impl EncodedShare {
    /// Creates a share from any integer `x`, a base, and a value string.
    #[must_use]
    pub fn new(x: impl Into<IBig>, base: u32, value: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            base,
            value: value.into(),
        }
    }
}

/// A single reconstruction problem: a threshold and its encoded shares.
///
/// The record format this mirrors also declares the total share count `n`;
/// that is driver metadata and is not carried here — the only requirement
/// is `shares.len() >= threshold`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    /// Minimum number of shares that determines the polynomial (`k`).
    pub threshold: usize,
    /// The encoded shares; at least `threshold` of them.
    pub shares: Vec<EncodedShare>,
}

/// Errors raised while recovering an instance.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecoverError {
    /// A share's value string failed to decode.
    #[error(transparent)]
    Radix(#[from] RadixError),

    /// The decoded point set could not be interpolated.
    #[error(transparent)]
    Interpolate(#[from] InterpolateError),
}

/// Decodes every share of an instance and recovers the constant term.
///
/// Shares are decoded in order; the first malformed share aborts the
/// instance. Interpolation then selects the `threshold` shares with the
/// smallest `x` values (see [`arcanum_interp::constant_term`] for the
/// selection policy).
///
/// # Errors
///
/// Returns [`RecoverError::Radix`] if any share's value string is invalid
/// in its declared base, and [`RecoverError::Interpolate`] if the shares
/// contain a duplicated `x`, the threshold is zero, or fewer than
/// `threshold` shares were supplied.
pub fn recover_constant(instance: &Instance) -> Result<Exact, RecoverError> {
    let mut points = PointSet::new();
    for share in &instance.shares {
        let y = decode(&share.value, share.base)?;
        points.insert(share.x.clone(), IBig::from(y))?;
    }
    Ok(constant_term(&points, instance.threshold)?)
}
