//! Sturm sequences and real-root bounds.
//!
//! The Sturm sequence of p is P₀ = p, P₁ = p′, Pᵢ₊₁ = −(Pᵢ₋₁ mod Pᵢ), ending
//! before the first zero remainder. The difference in sign variations of
//! the sequence at two points counts the distinct real roots between them.

use aliquot_integers::ArithmeticError;
use aliquot_rings::{Field, OrderedRing, RealProjection, Ring};
use tracing::debug;

use crate::polynomial::Polynomial;

/// Sign information for a Sturm sequence evaluated at one point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignCount {
    /// Sign changes between consecutive non-zero evaluations.
    pub changes: usize,
    /// The first member (the polynomial itself) vanishes at the point.
    pub is_root: bool,
}

/// Builds the Sturm sequence of `p`.
///
/// The zero polynomial has an empty sequence; a non-zero constant has the
/// one-element sequence `[p]`.
#[must_use]
pub fn sturm_sequence<R: Field>(p: &Polynomial<R>) -> Vec<Polynomial<R>> {
    if p.is_zero() {
        return Vec::new();
    }

    let mut seq = vec![p.clone()];
    let derivative = p.derivative();
    if derivative.is_zero() {
        return seq;
    }
    seq.push(derivative);

    loop {
        let n = seq.len();
        // The divisor is the last pushed member, which is never zero.
        let Ok(remainder) = seq[n - 2].rem(&seq[n - 1]) else {
            break;
        };
        if remainder.is_zero() {
            break;
        }
        seq.push(remainder.neg());
    }

    debug!(degree = p.degree(), len = seq.len(), "built sturm sequence");
    seq
}

/// Divides every member by the last one made monic, the gcd of p and p′.
///
/// The reduced sequence counts each distinct root once, including roots of
/// even multiplicity where p itself does not change sign. For square-free
/// input the last member is a constant and no count changes.
#[must_use]
pub fn reduce_sequence<R: Field>(seq: &[Polynomial<R>]) -> Vec<Polynomial<R>> {
    let Some(gcd) = seq.last() else {
        return Vec::new();
    };
    if gcd.degree() == 0 {
        return seq.to_vec();
    }
    let gcd = gcd.monic();
    seq.iter()
        .map(|p| {
            p.checked_div(&gcd)
                .unwrap_or_else(|_| unreachable!("monic gcd is non-zero"))
        })
        .collect()
}

/// An upper bound on the magnitude of every real root of `p`:
/// `max|cᵢ| / |c_lead| + 1`.
///
/// # Errors
///
/// Returns [`ArithmeticError::NonRealValue`] if any coefficient has an
/// imaginary part, and [`ArithmeticError::DivideByZero`] for the zero
/// polynomial.
pub fn cauchy_bound<R>(p: &Polynomial<R>) -> Result<R::Real, ArithmeticError>
where
    R: RealProjection,
    R::Real: Field,
{
    let lead = p.leading_coeff().ok_or(ArithmeticError::DivideByZero)?;
    let lead = OrderedRing::abs(&lead.try_real()?);

    let mut max = <R::Real as Ring>::zero();
    for (_, c) in p.terms() {
        let magnitude = OrderedRing::abs(&c.try_real()?);
        if magnitude > max {
            max = magnitude;
        }
    }

    Ok(max.checked_div(&lead)? + <R::Real as Ring>::one())
}

/// Evaluates every member of `seq` at `x` and counts sign changes, skipping
/// zero values.
///
/// # Errors
///
/// Returns [`ArithmeticError::NonRealValue`] if an evaluation is not real.
pub fn sign_changes<R: RealProjection>(
    seq: &[Polynomial<R>],
    x: &R::Real,
) -> Result<SignCount, ArithmeticError> {
    let point = R::from_real(x.clone());
    let mut changes = 0;
    let mut is_root = false;
    let mut last_sign = 0i8;

    for (i, p) in seq.iter().enumerate() {
        let sign = p.eval(&point).try_real()?.signum();
        if sign == 0 {
            if i == 0 {
                is_root = true;
            }
            continue;
        }
        if last_sign != 0 && sign != last_sign {
            changes += 1;
        }
        last_sign = sign;
    }

    Ok(SignCount { changes, is_root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliquot_integers::Rational;
    use aliquot_rings::Complex;

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    fn poly(coeffs: &[i64]) -> Polynomial<Rational> {
        Polynomial::from_coeffs(coeffs.iter().map(|&c| q(c)))
    }

    #[test]
    fn test_sturm_sequence_cubic() {
        // p = x^3 - x, p' = 3x^2 - 1, -(p mod p') = 2x/3, -(p' mod 2x/3) = 1
        let seq = sturm_sequence(&poly(&[0, -1, 0, 1]));
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[1], poly(&[-1, 0, 3]));
        assert_eq!(seq[2], Polynomial::monomial(Rational::from_i64(2, 3).unwrap(), 1));
        assert_eq!(seq[3], poly(&[1]));
    }

    #[test]
    fn test_sturm_sequence_degenerate() {
        assert!(sturm_sequence(&Polynomial::<Rational>::zero()).is_empty());
        assert_eq!(sturm_sequence(&poly(&[7])), vec![poly(&[7])]);
    }

    #[test]
    fn test_sturm_sequence_double_root() {
        // (x - 1)^2: the remainder p mod p' is zero, so the sequence stops at p'.
        let seq = sturm_sequence(&poly(&[1, -2, 1]));
        assert_eq!(seq, vec![poly(&[1, -2, 1]), poly(&[-2, 2])]);

        let reduced = reduce_sequence(&seq);
        assert_eq!(reduced[0], poly(&[-1, 1]));
        assert_eq!(reduced[1], poly(&[2]));
    }

    #[test]
    fn test_reduce_sequence_keeps_every_member() {
        // (x - 1)^2 (x + 2) = x^3 - 3x + 2, gcd with p' is x - 1
        let seq = sturm_sequence(&poly(&[2, -3, 0, 1]));
        assert_eq!(seq, vec![poly(&[2, -3, 0, 1]), poly(&[-3, 0, 3]), poly(&[-2, 2])]);

        let reduced = reduce_sequence(&seq);
        assert_eq!(reduced.len(), seq.len());
        assert_eq!(reduced, vec![poly(&[-2, 1, 1]), poly(&[3, 3]), poly(&[2])]);
    }

    #[test]
    fn test_sign_changes_count_roots() {
        let seq = sturm_sequence(&poly(&[0, -1, 0, 1]));
        let lo = sign_changes(&seq, &q(-2)).unwrap();
        let hi = sign_changes(&seq, &q(2)).unwrap();
        assert_eq!(lo.changes - hi.changes, 3);
        assert!(!lo.is_root);

        let at_root = sign_changes(&seq, &q(1)).unwrap();
        assert!(at_root.is_root);
        assert_eq!(at_root.changes - hi.changes, 0);
    }

    #[test]
    fn test_cauchy_bound() {
        // 2x^2 - 8: max |c| = 8, |lead| = 2
        assert_eq!(cauchy_bound(&poly(&[-8, 0, 2])).unwrap(), q(5));
        assert_eq!(cauchy_bound(&poly(&[3])).unwrap(), q(2));
        assert_eq!(
            cauchy_bound(&Polynomial::<Rational>::zero()),
            Err(ArithmeticError::DivideByZero)
        );
    }

    #[test]
    fn test_non_real_coefficients() {
        let p = Polynomial::new([
            (Complex::new(q(0), q(1)), 1),
            (Complex::real(q(1)), 0),
        ]);
        assert!(matches!(cauchy_bound(&p), Err(ArithmeticError::NonRealValue(_))));

        let seq = sturm_sequence(&p);
        assert!(matches!(sign_changes(&seq, &q(1)), Err(ArithmeticError::NonRealValue(_))));
    }

    #[test]
    fn test_complex_with_real_coefficients() {
        let p = Polynomial::new([(Complex::real(q(1)), 2), (Complex::real(q(-4)), 0)]);
        assert_eq!(cauchy_bound(&p).unwrap(), q(5));
        let seq = sturm_sequence(&p);
        let lo = sign_changes(&seq, &q(-5)).unwrap();
        let hi = sign_changes(&seq, &q(5)).unwrap();
        assert_eq!(lo.changes - hi.changes, 2);
    }
}
