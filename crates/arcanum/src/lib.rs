//! # Arcanum
//!
//! Exact reconstruction of a polynomial's constant term from base-encoded
//! shares.
//!
//! An instance supplies `n` sample points of an unknown polynomial of
//! degree `k - 1`; each point's value arrives as a digit string in its own
//! positional base. Arcanum decodes the values into arbitrary precision
//! integers and recovers the polynomial's value at `x = 0` by Lagrange
//! interpolation over exact big rationals — floating point never enters
//! the computation.
//!
//! ## Quick Start
//!
//! ```
//! use arcanum::prelude::*;
//!
//! // P(x) = x^2 + x + 2, sampled at x = 1, 2, 3
//! let instance = Instance {
//!     threshold: 3,
//!     shares: vec![
//!         EncodedShare::new(1, 10, "4"),
//!         EncodedShare::new(2, 2, "111"),
//!         EncodedShare::new(3, 10, "12"),
//!     ],
//! };
//! assert_eq!(recover_constant(&instance).unwrap().to_string(), "2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use arcanum_interp as interp;
pub use arcanum_radix as radix;

pub mod recover;

pub use recover::{recover_constant, EncodedShare, Instance, RecoverError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use arcanum_interp::{constant_term, Exact, InterpolateError, Point, PointSet};
    pub use arcanum_radix::{decode, encode, RadixError};

    pub use crate::recover::{recover_constant, EncodedShare, Instance, RecoverError};
}
