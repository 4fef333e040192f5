//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Multi-word integers built from a decimal digit string
    fn big_int() -> impl Strategy<Value = Integer> {
        "-?[0-9]{1,60}".prop_map(|s| s.parse::<Integer>().unwrap())
    }

    fn non_zero_big_int() -> impl Strategy<Value = Integer> {
        big_int().prop_filter("divisor must be non-zero", |n| !n.is_zero())
    }

    /// The expected canonical spelling of a decimal literal.
    fn canonical_decimal(s: &str) -> String {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else if negative {
            format!("-{trimmed}")
        } else {
            trimmed.to_string()
        }
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn integer_add_then_sub(a in big_int(), b in big_int()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn integer_mul_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn integer_distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn integer_additive_inverse(a in big_int()) {
            let sum = &a + &(-&a);
            prop_assert!(sum.is_zero());
            prop_assert!(!sum.is_negative());
        }

        #[test]
        fn integer_matches_i64(a in small_int(), b in non_zero_int()) {
            let (x, y) = (Integer::new(a), Integer::new(b));
            prop_assert_eq!((&x * &y).to_i64(), Some(a * b));
            prop_assert_eq!((&x / &y).to_i64(), Some(a / b));
            prop_assert_eq!((&x % &y).to_i64(), Some(a % b));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        // Division

        #[test]
        fn division_identity(a in big_int(), b in non_zero_big_int()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.cmp_magnitude(&b).is_lt());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }

        #[test]
        fn shift_is_power_of_two_scaling(a in big_int(), bits in 0usize..130) {
            let scaled = &a * &Integer::power_of_two(bits);
            prop_assert_eq!(&a << bits, scaled.clone());
            prop_assert_eq!(&scaled >> bits, a);
        }

        // Formatting

        #[test]
        fn decimal_round_trip(s in "-?[0-9]{1,80}") {
            let n: Integer = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), canonical_decimal(&s));
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_big_int(), b in non_zero_big_int()) {
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Rational field axioms and canonical form

        #[test]
        fn rational_always_canonical(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            let mut results = vec![&a + &b, &a - &b, &a * &b];
            if !b.is_zero() {
                results.push(&a / &b);
            }
            for r in results {
                prop_assert!(r.denominator().is_positive());
                prop_assert!(r.numerator().gcd(r.denominator()).is_one());
            }
        }

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            prop_assert_eq!(&a * &a.recip().unwrap(), Rational::one());
        }

        #[test]
        fn rational_floor_ceil_bracket(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            let floor = Rational::from_integer(a.floor());
            let ceil = Rational::from_integer(a.ceil());
            prop_assert!(floor <= a && a <= ceil);
            prop_assert!(&ceil - &floor <= Rational::one());
        }

        #[test]
        fn rational_decimal_parse_is_exact(int_part in 0u32..100_000, frac in "[0-9]{1,8}") {
            let s = format!("{int_part}.{frac}");
            let parsed: Rational = s.parse().unwrap();
            let scale = Integer::new(10).pow(frac.len() as u32);
            let digits: Integer = format!("{int_part}{frac}").parse().unwrap();
            prop_assert_eq!(&parsed * &Rational::from_integer(scale), Rational::from_integer(digits));
        }

        #[test]
        fn rational_from_f64_is_exact(x in -1.0e12f64..1.0e12f64) {
            let r = Rational::try_from(x).unwrap();
            // Dyadic: the denominator is a power of two.
            let d = r.denominator();
            prop_assert_eq!(d, &Integer::power_of_two(d.top_bit_index().unwrap()));
            if r.is_integer() {
                prop_assert_eq!(r.numerator().to_i64(), Some(x as i64));
            }
        }
    }
}
