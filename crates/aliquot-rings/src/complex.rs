//! Complex numbers over an ordered ring.
//!
//! `Complex<Rational>` is the Gaussian-rational field Q(i). It exists so
//! polynomials can carry non-real coefficients; root isolation rejects any
//! evaluation that does not project back onto the real line.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use aliquot_integers::ArithmeticError;

use crate::traits::{Field, OrderedRing, RealProjection, Ring};

/// A complex number `re + im·i`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T: OrderedRing> Complex<T> {
    /// Creates a complex number from its parts.
    #[must_use]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// A purely real value.
    #[must_use]
    pub fn real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// A purely imaginary value.
    #[must_use]
    pub fn imaginary(im: T) -> Self {
        Self { re: T::zero(), im }
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self::imaginary(T::one())
    }

    /// The complex conjugate.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }

    /// `re² + im²`.
    #[must_use]
    pub fn norm_sqr(&self) -> T {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }
}

impl<T: OrderedRing> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: OrderedRing> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: OrderedRing> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re.clone() * rhs.re.clone() - self.im.clone() * rhs.im.clone(),
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T: OrderedRing> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: OrderedRing> Ring for Complex<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    fn one() -> Self {
        Self::real(T::one())
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }

    fn from_i64(n: i64) -> Self {
        Self::real(T::from_i64(n))
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self {
            re: self.re.mul_by_scalar(n),
            im: self.im.mul_by_scalar(n),
        }
    }
}

impl<T: OrderedRing + Field> Field for Complex<T> {
    /// `1 / z = conj(z) / |z|²`.
    fn inv(&self) -> Result<Self, ArithmeticError> {
        let scale = self.norm_sqr().inv()?;
        Ok(Self {
            re: self.re.clone() * scale.clone(),
            im: -self.im.clone() * scale,
        })
    }
}

impl<T: OrderedRing> RealProjection for Complex<T> {
    type Real = T;

    fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    fn to_real(&self) -> Option<T> {
        self.is_real().then(|| self.re.clone())
    }

    fn from_real(real: T) -> Self {
        Self::real(real)
    }
}

fn write_imaginary<T: OrderedRing>(f: &mut fmt::Formatter<'_>, im: &T) -> fmt::Result {
    if im.is_one() {
        write!(f, "i")
    } else {
        write!(f, "{im}i")
    }
}

impl<T: OrderedRing> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_zero() {
            return write!(f, "{}", self.re);
        }
        if self.re.is_zero() {
            if self.im.signum() < 0 && self.im.abs().is_one() {
                return write!(f, "-i");
            }
            return write_imaginary(f, &self.im);
        }
        if self.im.signum() < 0 {
            write!(f, "{} - ", self.re)?;
            write_imaginary(f, &self.im.abs())
        } else {
            write!(f, "{} + ", self.re)?;
            write_imaginary(f, &self.im)
        }
    }
}

impl<T: OrderedRing> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::real(re)
    }
}
