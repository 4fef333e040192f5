//! Property-based tests for polynomial arithmetic and root isolation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;
    use crate::roots::roots_in_range;
    use crate::sturm::{sign_changes, sturm_sequence};
    use aliquot_integers::Rational;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-50i64..50i64).prop_map(Rational::from)
    }

    // Strategy for generating sparse polynomials (exponents 0-6)
    fn small_poly() -> impl Strategy<Value = Polynomial<Rational>> {
        proptest::collection::vec((small_coeff(), 0u32..7), 0..=5).prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Rational>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Distinct integer roots, so the product has only simple real roots
    fn distinct_roots() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::btree_set(-8i64..8, 1..=4).prop_map(|s| s.into_iter().collect())
    }

    fn from_roots(roots: &[i64]) -> Polynomial<Rational> {
        roots.iter().fold(Polynomial::one(), |acc, &r| {
            acc.mul(&Polynomial::from_coeffs([Rational::from(-r), Rational::from(1i64)]))
        })
    }

    proptest! {
        #[test]
        fn terms_strictly_increasing_and_nonzero(a in small_poly(), b in small_poly()) {
            for p in [a.add(&b), a.sub(&b), a.mul(&b)] {
                prop_assert!(p.terms().windows(2).all(|w| w[0].0 < w[1].0));
                prop_assert!(p.terms().iter().all(|(_, c)| *c != Rational::from(0i64)));
            }
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert_eq!(a.add(&Polynomial::zero()), a);
        }

        #[test]
        fn poly_divmod_identity(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn poly_derivative_product_rule(a in small_poly(), b in small_poly()) {
            // (ab)' = a'b + ab'
            let left = a.mul(&b).derivative();
            let right = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_eval_is_homomorphism(a in small_poly(), b in small_poly(), x in -5i64..5) {
            let x = Rational::from(x);
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_compose_matches_eval(a in small_poly(), b in small_poly(), x in -3i64..3) {
            let x = Rational::from(x);
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }

        #[test]
        fn sturm_counts_distinct_roots(roots in distinct_roots()) {
            let p = from_roots(&roots);
            let seq = sturm_sequence(&p);
            let lo = sign_changes(&seq, &Rational::from(-100i64)).unwrap();
            let hi = sign_changes(&seq, &Rational::from(100i64)).unwrap();
            prop_assert_eq!(lo.changes - hi.changes, roots.len());
        }

        #[test]
        fn isolation_finds_every_root(roots in distinct_roots()) {
            let p = from_roots(&roots);
            let tol = Rational::from_i64(1, 1000).unwrap();
            let found = roots_in_range(
                &sturm_sequence(&p),
                &Rational::from(-20i64),
                &Rational::from(20i64),
                &tol,
            )
            .unwrap();
            prop_assert_eq!(found.len(), roots.len());
            for (approx, exact) in found.iter().zip(&roots) {
                let diff = (approx.clone() - Rational::from(*exact)).abs();
                prop_assert!(diff <= tol);
            }
        }
    }
}
