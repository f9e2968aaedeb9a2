//! Lagrange interpolation at `x = 0` in exact rational arithmetic.

use dashu::base::UnsignedAbs;
use dashu::integer::IBig;
use dashu::rational::RBig;

use crate::error::InterpolateError;
use crate::exact::Exact;
use crate::point::PointSet;

/// Recovers the constant term of the degree-`k-1` polynomial through the
/// selected points.
///
/// Selection policy: **ascending-x truncation**. When more than `k` points
/// are supplied, the `k` with the smallest `x` values are used and the
/// rest are ignored. Any consistent `k`-subset determines the same
/// polynomial, so for well-formed inputs the extra points are redundant;
/// if the input contains a corrupted point, the result matches whichever
/// polynomial fits the selected subset. No cross-check against the unused
/// points is performed.
///
/// Every basis value `Li(0) = Π_{j≠i} -xj / (xi - xj)` and the final sum
/// `Σ yi * Li(0)` are computed over reduced big rationals, so the result
/// is exact at any coordinate scale.
///
/// # Errors
///
/// Returns [`InterpolateError::InvalidThreshold`] if `k` is zero and
/// [`InterpolateError::InsufficientPoints`] if the set holds fewer than
/// `k` points.
pub fn constant_term(points: &PointSet, k: usize) -> Result<Exact, InterpolateError> {
    if k < 1 {
        return Err(InterpolateError::InvalidThreshold(k));
    }
    if points.len() < k {
        return Err(InterpolateError::InsufficientPoints {
            have: points.len(),
            need: k,
        });
    }

    let chosen: Vec<(&IBig, &IBig)> = points.iter().take(k).collect();

    let mut sum = RBig::ZERO;
    for (i, &(xi, yi)) in chosen.iter().enumerate() {
        // Li(0) as a single fraction: Π(-xj) / Π(xi - xj)
        let mut numerator = IBig::ONE;
        let mut denominator = IBig::ONE;
        for (j, &(xj, _)) in chosen.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = numerator * (-xj);
            denominator = denominator * (xi - xj);
        }

        // PointSet keys are unique, so the denominator cannot vanish.
        let (numerator, denominator) = if denominator < IBig::ZERO {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let term = RBig::from_parts(numerator * yi, denominator.unsigned_abs());
        sum = sum + term;
    }

    Ok(Exact::from_rational(sum))
}
