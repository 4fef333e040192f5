//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::complex::Complex;
    use crate::traits::{Field, RealProjection, Ring};
    use aliquot_integers::Rational;

    type Cq = Complex<Rational>;

    // Strategy for generating small rationals
    fn small_rational() -> impl Strategy<Value = Rational> {
        (-30i64..30, 1i64..12).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn gaussian() -> impl Strategy<Value = Cq> {
        (small_rational(), small_rational()).prop_map(|(re, im)| Complex::new(re, im))
    }

    proptest! {
        #[test]
        fn complex_mul_commutative(a in gaussian(), b in gaussian()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn complex_distributive(a in gaussian(), b in gaussian(), c in gaussian()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn complex_inverse(a in gaussian()) {
            prop_assume!(!a.is_zero());
            prop_assert!((a.clone() * a.inv().unwrap()).is_one());
        }

        #[test]
        fn complex_norm_is_multiplicative(a in gaussian(), b in gaussian()) {
            prop_assert_eq!((a.clone() * b.clone()).norm_sqr(), a.norm_sqr() * b.norm_sqr());
        }

        #[test]
        fn conjugate_product_is_real(a in gaussian()) {
            let product = a.clone() * a.conj();
            prop_assert_eq!(product.to_real(), Some(a.norm_sqr()));
        }

        #[test]
        fn mul_by_scalar_matches_repeated_addition(a in small_rational(), n in -20i64..20) {
            let expected = Rational::from(n) * a.clone();
            prop_assert_eq!(a.mul_by_scalar(n), expected.clone());
            prop_assert_eq!(Complex::real(a).mul_by_scalar(n), Complex::real(expected));
        }

        #[test]
        fn pow_adds_exponents(a in gaussian(), m in 0u32..5, n in 0u32..5) {
            prop_assert_eq!(a.pow(m) * a.pow(n), a.pow(m + n));
        }
    }
}
