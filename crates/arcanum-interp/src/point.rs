//! Integer sample points keyed by ascending `x`.

use std::collections::BTreeMap;

use dashu::integer::IBig;

use crate::error::InterpolateError;

/// A single polynomial sample `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// The evaluation coordinate.
    pub x: IBig,
    /// The polynomial's value at `x`.
    pub y: IBig,
}

impl Point {
    /// Creates a point from any pair convertible to big integers.
    #[must_use]
    pub fn new(x: impl Into<IBig>, y: impl Into<IBig>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// An immutable collection of samples with pairwise distinct `x`.
///
/// Points are stored keyed by `x` in ascending order; that order is the
/// one the interpolator's selection policy is defined on, so iteration is
/// deterministic regardless of insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PointSet {
    points: BTreeMap<IBig, IBig>,
}

impl PointSet {
    /// Creates an empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a point set, rejecting duplicated `x` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolateError::DuplicateX`] if two points share an `x`
    /// value. A duplicate is never silently overwritten: interpolation
    /// would divide by `xi - xj = 0`, so the conflict is surfaced to the
    /// caller that assembled the input.
    pub fn from_points<I>(points: I) -> Result<Self, InterpolateError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut set = Self::new();
        for p in points {
            set.insert(p.x, p.y)?;
        }
        Ok(set)
    }

    /// Inserts a single point.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolateError::DuplicateX`] if a point with the same
    /// `x` is already present.
    pub fn insert(
        &mut self,
        x: impl Into<IBig>,
        y: impl Into<IBig>,
    ) -> Result<(), InterpolateError> {
        let x = x.into();
        if self.points.contains_key(&x) {
            return Err(InterpolateError::DuplicateX(x));
        }
        self.points.insert(x, y.into());
        Ok(())
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Looks up the `y` value recorded for `x`.
    #[must_use]
    pub fn get(&self, x: &IBig) -> Option<&IBig> {
        self.points.get(x)
    }

    /// Iterates over `(x, y)` pairs in ascending `x` order.
    pub fn iter(&self) -> impl Iterator<Item = (&IBig, &IBig)> {
        self.points.iter()
    }
}
