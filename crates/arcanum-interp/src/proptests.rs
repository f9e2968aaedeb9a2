//! Property-based tests for exact interpolation.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;

    use crate::{constant_term, Exact, Point, PointSet};

    // Coefficients of a random integer polynomial, constant term first.
    fn coefficients() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-10_000i64..10_000, 1..8)
    }

    fn eval(coeffs: &[i64], x: i64) -> IBig {
        let x = IBig::from(x);
        let mut acc = IBig::ZERO;
        for &c in coeffs.iter().rev() {
            acc = acc * &x + IBig::from(c);
        }
        acc
    }

    proptest! {
        #[test]
        fn recovers_constant_coefficient(coeffs in coefficients(), extra in 0usize..4) {
            let k = coeffs.len();
            let points: Vec<Point> = (1..=(k + extra) as i64)
                .map(|x| Point::new(x, eval(&coeffs, x)))
                .collect();
            let set = PointSet::from_points(points).unwrap();

            let result = constant_term(&set, k).unwrap();
            prop_assert_eq!(result, Exact::Integer(IBig::from(coeffs[0])));
        }

        #[test]
        fn insertion_order_is_irrelevant(coeffs in coefficients()) {
            let k = coeffs.len();
            let forward: Vec<Point> = (1..=k as i64)
                .map(|x| Point::new(x, eval(&coeffs, x)))
                .collect();
            let mut reversed = forward.clone();
            reversed.reverse();

            let a = constant_term(&PointSet::from_points(forward).unwrap(), k).unwrap();
            let b = constant_term(&PointSet::from_points(reversed).unwrap(), k).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn any_sample_window_agrees(coeffs in coefficients(), shift in 1i64..50) {
            // sampling at x = shift..shift+k-1 instead of 1..k changes the
            // selected subset but not the constant term
            let k = coeffs.len();
            let points: Vec<Point> = (shift..shift + k as i64)
                .map(|x| Point::new(x, eval(&coeffs, x)))
                .collect();
            let set = PointSet::from_points(points).unwrap();

            let result = constant_term(&set, k).unwrap();
            prop_assert_eq!(result, Exact::Integer(IBig::from(coeffs[0])));
        }

        #[test]
        fn degree_zero_returns_the_point(x in 1i64..100, y in -1_000_000i64..1_000_000) {
            let set = PointSet::from_points([Point::new(x, y)]).unwrap();
            prop_assert_eq!(constant_term(&set, 1).unwrap(), Exact::from(y));
        }
    }
}
