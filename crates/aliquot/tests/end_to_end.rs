//! End-to-end scenarios across the integer, rational and polynomial layers.

use aliquot::prelude::*;

fn int(s: &str) -> Integer {
    s.parse().unwrap()
}

fn rat(s: &str) -> Rational {
    s.parse().unwrap()
}

#[test]
fn big_integer_sum() {
    assert_eq!(int("5120000000000") + int("2550000000000"), int("7670000000000"));
}

#[test]
fn decimal_division_is_exact() {
    assert_eq!(rat("1.5") / rat("0.5"), Rational::from(3i64));
    assert_eq!(rat("1.5").checked_div(&rat("0.5")), Ok(Rational::from(3i64)));
}

#[test]
fn every_divisor_entry_point_rejects_zero() {
    let zero_int = Integer::new(0);
    let a = int("123456789012345678901234567890");
    assert_eq!(a.div_rem(&zero_int), Err(ArithmeticError::DivideByZero));
    assert_eq!(a.checked_div(&zero_int), Err(ArithmeticError::DivideByZero));
    assert_eq!(a.checked_rem(&zero_int), Err(ArithmeticError::DivideByZero));
    let mut receiver = a.clone();
    let mut quotient = Integer::new(0);
    assert_eq!(
        receiver.div_rem_assign(&zero_int, &mut quotient),
        Err(ArithmeticError::DivideByZero)
    );

    let zero_rat = Rational::from(0i64);
    let r = rat("2.5");
    assert_eq!(r.checked_div(&zero_rat), Err(ArithmeticError::DivideByZero));
    assert_eq!(zero_rat.recip(), Err(ArithmeticError::DivideByZero));
    assert_eq!(zero_rat.inv(), Err(ArithmeticError::DivideByZero));
    assert_eq!(zero_rat.pow(-2), Err(ArithmeticError::DivideByZero));
    assert_eq!(Rational::new(Integer::new(1), Integer::new(0)), Err(ArithmeticError::DivideByZero));

    let p = Polynomial::from_coeffs([1i64, 2, 3].map(Rational::from));
    let zero_poly = Polynomial::<Rational>::zero();
    assert_eq!(p.div_rem(&zero_poly), Err(ArithmeticError::DivideByZero));
    assert_eq!(p.rem(&zero_poly), Err(ArithmeticError::DivideByZero));
    assert_eq!(p.checked_div(&zero_poly), Err(ArithmeticError::DivideByZero));

    let zc = Complex::<Rational>::zero();
    assert_eq!(zc.inv(), Err(ArithmeticError::DivideByZero));
}

#[test]
#[should_panic]
fn integer_operator_division_by_zero_panics() {
    let _ = Integer::new(1) / Integer::new(0);
}

#[test]
fn repeating_decimals() {
    let third = Rational::from_i64(1, 3).unwrap();
    assert_eq!(third.to_decimal_string(1), "0.(3)");
    assert_eq!(third.to_decimal_string(50), "0.(3)");
    assert_eq!(third.to_string(), "0.(3)");
    assert_eq!(Rational::from_i64(1, 4).unwrap().to_string(), "0.25");
    assert_eq!(Rational::from_i64(-1, 7).unwrap().to_string(), "-0.(142857)");
}

#[test]
fn double_root_isolation() {
    // x^2 - 2x + 1 = (x - 1)^2
    let p = Polynomial::from_coeffs([1i64, -2, 1].map(Rational::from));
    let tol = rat("0.0001");
    let seq = sturm_sequence(&p);
    let roots = roots_in_range(&seq, &Rational::from(-10i64), &Rational::from(10i64), &tol).unwrap();
    assert_eq!(roots.len(), 1);
    let err = (roots[0].clone() - Rational::from(1i64)).abs();
    assert!(err <= tol);
}

#[test]
fn roots_of_product_with_rational_roots() {
    // (2x - 1)(3x + 2) = 6x^2 + x - 2, roots 1/2 and -2/3
    let p = Polynomial::from_coeffs([-2i64, 1, 6].map(Rational::from));
    let tol = rat("0.00001");
    let roots = real_roots(&p, &tol).unwrap();
    assert_eq!(roots.len(), 2);
    let expected = [Rational::from_i64(-2, 3).unwrap(), Rational::from_i64(1, 2).unwrap()];
    for (root, exact) in roots.iter().zip(&expected) {
        assert!((root.clone() - exact.clone()).abs() <= tol, "{root} vs {exact}");
    }
}

#[test]
fn float_bits_feed_rational_arithmetic() {
    let a = Rational::try_from(0.1f64).unwrap();
    let b = Rational::try_from(0.2f64).unwrap();
    let c = Rational::try_from(0.3f64).unwrap();
    // Binary floats are exact dyadics, so 0.1 + 0.2 != 0.3 here too.
    assert_ne!(a.clone() + b, c);
    assert!(a.denominator().is_positive());
    assert_eq!(Rational::try_from(f64::NAN), Err(ArithmeticError::NonFiniteFloat));
}

#[test]
fn polynomial_display_and_division_round_trip() {
    let p = Polynomial::from_coeffs([-1i64, 0, 0, 1].map(Rational::from));
    let d = Polynomial::from_coeffs([-1i64, 1].map(Rational::from));
    let (q, r) = p.div_rem(&d).unwrap();
    assert_eq!(q.to_string(), "x^2 + x + 1");
    assert!(r.is_zero());
    assert_eq!(q.mul(&d).add(&r), p);
}

#[test]
fn gaussian_rational_polynomial() {
    // (x - i)(x + i) = x^2 + 1, which has no real roots
    let i = Complex::<Rational>::i();
    let x = Polynomial::<Complex<Rational>>::x();
    let p = x.sub(&Polynomial::constant(i.clone())).mul(&x.add(&Polynomial::constant(i)));
    assert_eq!(p.to_string(), "x^2 + 1");
    let roots = real_roots(&p, &rat("0.001")).unwrap();
    assert!(roots.is_empty());
}

mod properties {
    use aliquot::prelude::*;
    use proptest::prelude::*;

    fn fraction() -> impl Strategy<Value = Rational> {
        (-20i64..20, 1i64..8).prop_map(|(n, d)| {
            Rational::from_i64(n, d).unwrap_or_else(|_| unreachable!("denominator is positive"))
        })
    }

    fn rational_poly(max_exp: u32) -> impl Strategy<Value = Polynomial<Rational>> {
        proptest::collection::vec((fraction(), 0..max_exp), 0..=4).prop_map(Polynomial::new)
    }

    proptest! {
        #[test]
        fn div_rem_recovers_quotient_and_remainder(
            q in rational_poly(5),
            d in rational_poly(5).prop_filter("divisor must be non-constant", |d| d.degree() > 0),
            r in rational_poly(5),
        ) {
            // Keep only the part of r below deg d so it is a valid remainder.
            let r = Polynomial::new(
                r.terms().iter().filter(|(e, _)| *e < d.degree()).map(|(e, c)| (c.clone(), *e)),
            );
            let p = q.mul(&d).add(&r);
            let (q2, r2) = p.div_rem(&d).unwrap();
            prop_assert_eq!(q2, q);
            prop_assert_eq!(r2, r);
        }
    }
}
