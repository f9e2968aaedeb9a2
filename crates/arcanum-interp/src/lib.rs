//! # arcanum-interp
//!
//! Exact Lagrange interpolation at zero for Arcanum.
//!
//! This crate provides:
//! - [`Point`] and [`PointSet`]: immutable integer samples keyed by
//!   ascending `x`
//! - [`constant_term`]: the polynomial's value at `x = 0`, computed in
//!   exact big-rational arithmetic
//! - [`Exact`]: the integer-or-reduced-rational result type
//!
//! Floating point is never used: coordinates and values routinely exceed
//! the range where `f64` division stays exact, so every basis value is
//! tracked as a reduced `dashu` rational.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod exact;
pub mod lagrange;
pub mod point;

#[cfg(test)]
mod proptests;

pub use error::InterpolateError;
pub use exact::Exact;
pub use lagrange::constant_term;
pub use point::{Point, PointSet};
