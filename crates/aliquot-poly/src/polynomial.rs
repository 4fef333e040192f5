//! Sparse univariate polynomials.
//!
//! This module provides sparse polynomial representation for
//! efficient handling of polynomials with few non-zero terms.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use aliquot_integers::ArithmeticError;
use aliquot_rings::{Field, RealProjection, Ring};

/// A sparse univariate polynomial.
///
/// Terms are stored as (exponent, coefficient) pairs in strictly increasing
/// exponent order, and no stored coefficient is zero. The zero polynomial
/// has no terms.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<R: Ring> {
    /// Terms in ascending exponent order.
    terms: Vec<(u32, R)>,
}

impl<R: Ring> Polynomial<R> {
    /// Creates a polynomial from (coefficient, exponent) pairs.
    ///
    /// Pairs may come in any order; like terms are combined and zero
    /// coefficients dropped.
    #[must_use]
    pub fn new(terms: impl IntoIterator<Item = (R, u32)>) -> Self {
        let mut poly = Self::zero();
        for (c, e) in terms {
            poly.add_term(c, e);
        }
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(R::one(), 1)
    }

    /// Creates the monomial c * x^exp.
    #[must_use]
    pub fn monomial(c: R, exp: u32) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![(exp, c)] }
        }
    }

    /// Creates a polynomial from dense coefficients in ascending degree order.
    #[must_use]
    pub fn from_coeffs(coeffs: impl IntoIterator<Item = R>) -> Self {
        let terms = coeffs
            .into_iter()
            .zip(0u32..)
            .filter(|(c, _)| !c.is_zero())
            .map(|(c, e)| (e, c))
            .collect();
        Self { terms }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms as (exponent, coefficient) in ascending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[(u32, R)] {
        &self.terms
    }

    /// Returns the degree; the zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.last().map_or(0, |(e, _)| *e)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.last().map(|(_, c)| c)
    }

    /// Returns the leading term (exponent, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<&(u32, R)> {
        self.terms.last()
    }

    /// Returns the coefficient of x^exp, or zero if there is no such term.
    #[must_use]
    pub fn coeff(&self, exp: u32) -> R {
        match self.terms.binary_search_by_key(&exp, |(e, _)| *e) {
            Ok(i) => self.terms[i].1.clone(),
            Err(_) => R::zero(),
        }
    }

    /// Adds `c * x^exp` in place.
    ///
    /// A missing term is inserted at its sorted position; a term that
    /// cancels to zero is removed.
    pub fn add_term(&mut self, c: R, exp: u32) {
        if c.is_zero() {
            return;
        }
        match self.terms.binary_search_by_key(&exp, |(e, _)| *e) {
            Ok(i) => {
                let sum = self.terms[i].1.clone() + c;
                if sum.is_zero() {
                    self.terms.remove(i);
                } else {
                    self.terms[i].1 = sum;
                }
            }
            Err(i) => self.terms.insert(i, (exp, c)),
        }
    }

    /// Replaces the coefficient of x^exp.
    pub fn set_coeff(&mut self, exp: u32, c: R) {
        match self.terms.binary_search_by_key(&exp, |(e, _)| *e) {
            Ok(i) if c.is_zero() => {
                self.terms.remove(i);
            }
            Ok(i) => self.terms[i].1 = c,
            Err(_) if c.is_zero() => {}
            Err(i) => self.terms.insert(i, (exp, c)),
        }
    }

    /// Merges two term lists, combining coefficients with `op`.
    fn merge(&self, other: &Self, op: impl Fn(R, R) -> R) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        let (mut i, mut j) = (0, 0);

        while i < self.terms.len() || j < other.terms.len() {
            let lhs = self.terms.get(i);
            let rhs = other.terms.get(j);
            let (e, c) = match (lhs, rhs) {
                (Some((e1, a)), Some((e2, b))) if e1 == e2 => {
                    i += 1;
                    j += 1;
                    (*e1, op(a.clone(), b.clone()))
                }
                (Some((e1, a)), Some((e2, _))) if e1 < e2 => {
                    i += 1;
                    (*e1, op(a.clone(), R::zero()))
                }
                (Some((e1, a)), None) => {
                    i += 1;
                    (*e1, op(a.clone(), R::zero()))
                }
                (_, Some((e2, b))) => {
                    j += 1;
                    (*e2, op(R::zero(), b.clone()))
                }
                (None, None) => break,
            };
            if !c.is_zero() {
                terms.push((e, c));
            }
        }

        Self { terms }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.merge(other, |a, b| a + b)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.merge(other, |a, b| a - b)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(e, c)| (*e, -c.clone())).collect(),
        }
    }

    /// Multiplies two polynomials by full distribution.
    ///
    /// Every pair of terms contributes one product, folded into the result.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent exceeds `u32::MAX`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for (e1, c1) in &self.terms {
            for (e2, c2) in &other.terms {
                result.add_term(c1.clone() * c2.clone(), add_exponents(*e1, *e2));
            }
        }
        result
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.terms.iter().map(|(e, x)| (x.clone() * c.clone(), *e)))
    }

    /// Multiplies by the monomial c * x^exp.
    ///
    /// # Panics
    ///
    /// Panics if a shifted exponent exceeds `u32::MAX`.
    #[must_use]
    pub fn mul_monomial(&self, c: &R, exp: u32) -> Self {
        Self::new(
            self.terms
                .iter()
                .map(|(e, x)| (x.clone() * c.clone(), add_exponents(*e, exp))),
        )
    }

    /// Computes self^n by repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics if the degree of the result exceeds `u32::MAX`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Evaluates at a point with Horner's rule, skipping exponent gaps with
    /// a power.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        let mut prev = None;
        for (e, c) in self.terms.iter().rev() {
            if let Some(p) = prev {
                result = result * x.pow(p - e);
            }
            result = result + c.clone();
            prev = Some(*e);
        }
        match prev {
            Some(p) if p > 0 => result * x.pow(p),
            _ => result,
        }
    }

    /// Substitutes `inner` for the variable: returns `self(inner(x))`.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let mut result = Self::zero();
        let mut prev = None;
        for (e, c) in self.terms.iter().rev() {
            if let Some(p) = prev {
                result = result.mul(&inner.pow(p - e));
            }
            result.add_term(c.clone(), 0);
            prev = Some(*e);
        }
        match prev {
            Some(p) if p > 0 => result.mul(&inner.pow(p)),
            _ => result,
        }
    }

    /// Computes the first derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        self.nth_derivative(1)
    }

    /// Computes the n-th derivative.
    ///
    /// Terms below x^n vanish; the rest are scaled by the falling factorial
    /// e·(e−1)·…·(e−n+1).
    #[must_use]
    pub fn nth_derivative(&self, n: u32) -> Self {
        let terms = self
            .terms
            .iter()
            .filter(|(e, _)| *e >= n)
            .map(|(e, c)| {
                let coeff = (0..n).fold(c.clone(), |acc, k| acc.mul_by_scalar(i64::from(e - k)));
                (coeff, e - n)
            });
        Self::new(terms)
    }
}

impl<R: Field> Polynomial<R> {
    /// Polynomial long division.
    ///
    /// Returns `(q, r)` with `q * divisor + r == self` and `r` either zero or
    /// of lower degree than `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
        let mut remainder = self.clone();
        let mut quotient = Self::zero();
        remainder.div_rem_assign(divisor, &mut quotient)?;
        Ok((quotient, remainder))
    }

    /// In-place long division: `self` becomes the remainder and the quotient
    /// is written to `quotient`.
    ///
    /// The receiver can be neither the divisor nor the quotient output; the
    /// borrow checker rejects both:
    ///
    /// ```compile_fail
    /// use aliquot_integers::Rational;
    /// use aliquot_poly::Polynomial;
    ///
    /// let mut p = Polynomial::<Rational>::x();
    /// let mut q = Polynomial::zero();
    /// p.div_rem_assign(&p, &mut q).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero; the
    /// receiver and `quotient` are left untouched.
    pub fn div_rem_assign(&mut self, divisor: &Self, quotient: &mut Self) -> Result<(), ArithmeticError> {
        let Some((divisor_exp, divisor_lead)) = divisor.leading_term() else {
            return Err(ArithmeticError::DivideByZero);
        };
        let divisor_lead_inv = divisor_lead.inv()?;

        *quotient = Self::zero();
        while let Some((exp, lead)) = self.leading_term() {
            if exp < divisor_exp {
                break;
            }
            let factor_coeff = lead.clone() * divisor_lead_inv.clone();
            let factor_exp = exp - divisor_exp;
            let leading_exp = *exp;

            *self = self.sub(&divisor.mul_monomial(&factor_coeff, factor_exp));
            quotient.add_term(factor_coeff, factor_exp);

            // Exact field arithmetic cancels the leading term.
            debug_assert!(self.leading_term().map_or(true, |(e, _)| *e < leading_exp));
        }
        Ok(())
    }

    /// The remainder of division by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// The quotient of division by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Scales so the leading coefficient is one. The zero polynomial is
    /// returned unchanged.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().map(Field::inv) {
            Some(Ok(inv)) => self.scale(&inv),
            _ => self.clone(),
        }
    }
}

fn add_exponents(a: u32, b: u32) -> u32 {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("exponent overflow: x^{a} * x^{b} exceeds u32::MAX"))
}

/// Prints the highest degree first, e.g. `x^2 - 2x + 1`.
///
/// A negative real coefficient after the first term is shown as a
/// subtraction, unit coefficients are omitted, and non-real coefficients
/// are parenthesized.
impl<R: RealProjection> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (e, c)) in self.terms.iter().rev().enumerate() {
            let shown = if i == 0 {
                c.clone()
            } else if c.is_negative_real() {
                write!(f, " - ")?;
                -c.clone()
            } else {
                write!(f, " + ")?;
                c.clone()
            };

            if *e == 0 {
                write_coeff(f, &shown)?;
                continue;
            }
            if (-shown.clone()).is_one() {
                write!(f, "-")?;
            } else if !shown.is_one() {
                write_coeff(f, &shown)?;
            }
            write!(f, "x")?;
            if *e > 1 {
                write!(f, "^{e}")?;
            }
        }
        Ok(())
    }
}

fn write_coeff<R: RealProjection>(f: &mut fmt::Formatter<'_>, c: &R) -> fmt::Result {
    if c.is_real() {
        match f.precision() {
            Some(p) => write!(f, "{c:.p$}"),
            None => write!(f, "{c}"),
        }
    } else {
        write!(f, "({c})")
    }
}

impl<R: Ring> Add for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<R: Ring> Sub for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<R: Ring> Mul for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<R: Ring> Neg for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl<R: Ring> From<R> for Polynomial<R> {
    fn from(c: R) -> Self {
        Self::constant(c)
    }
}
