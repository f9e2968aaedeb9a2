//! The exact integer-or-rational result type.

use std::fmt;

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

/// An exact interpolation result.
///
/// A consistent instance always reconstructs to an integer; a fractional
/// value means the selected points do not lie on one degree-`k-1`
/// polynomial. Both cases are carried exactly so the caller can tell them
/// apart instead of receiving a silently rounded number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exact {
    /// The reduced value has denominator 1.
    Integer(IBig),
    /// The reduced value is a proper fraction, in lowest terms.
    Rational(RBig),
}

impl Exact {
    /// Classifies a reduced rational, collapsing denominator-1 values into
    /// the integer case.
    #[must_use]
    pub fn from_rational(value: RBig) -> Self {
        if *value.denominator() == UBig::ONE {
            Self::Integer(value.numerator().clone())
        } else {
            Self::Rational(value)
        }
    }

    /// Returns true if the value is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns the integer value, if there is one.
    #[must_use]
    pub fn as_integer(&self) -> Option<&IBig> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Rational(_) => None,
        }
    }

    /// Converts to a rational regardless of case.
    #[must_use]
    pub fn into_rational(self) -> RBig {
        match self {
            Self::Integer(n) => RBig::from(n),
            Self::Rational(r) => r,
        }
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Rational(r) => write!(f, "{}/{}", r.numerator(), r.denominator()),
        }
    }
}

impl From<IBig> for Exact {
    fn from(n: IBig) -> Self {
        Self::Integer(n)
    }
}

impl From<i64> for Exact {
    fn from(n: i64) -> Self {
        Self::Integer(IBig::from(n))
    }
}
