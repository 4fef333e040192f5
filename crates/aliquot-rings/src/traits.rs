//! Algebraic structure traits.
//!
//! This module defines the capabilities a polynomial coefficient must
//! provide. Polynomial arithmetic is written against [`Ring`]; division and
//! root isolation additionally need [`Field`] and [`RealProjection`].

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use aliquot_integers::ArithmeticError;

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of a machine integer, `n * one()`.
    fn from_i64(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }

    /// Computes self + self + ... (n times), by doubling.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        let mut addend = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + addend.clone();
            }
            k >>= 1;
            if k > 0 {
                addend = addend.clone() + addend;
            }
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if the element is zero.
    fn inv(&self) -> Result<Self, ArithmeticError>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `other` is zero.
    fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        Ok(self.clone() * other.inv()?)
    }

    /// Halves an element; used for interval midpoints.
    fn half(&self) -> Self {
        self.clone() * Self::from_i64(2).inv().unwrap_or_else(|_| unreachable!("2 is invertible in characteristic zero"))
    }
}

/// A totally ordered ring.
pub trait OrderedRing: Ring + Ord {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

/// Coefficients that may or may not lie on the real line.
///
/// Real-valued types project onto themselves; the complex extension
/// projects only when its imaginary part vanishes. Sturm sign counting and
/// root isolation work on the projection.
pub trait RealProjection: Ring {
    /// The ordered real type this ring embeds.
    type Real: OrderedRing;

    /// Returns true if the value has no imaginary component.
    fn is_real(&self) -> bool;

    /// The value as a real, or `None` if it is not purely real.
    fn to_real(&self) -> Option<Self::Real>;

    /// Embeds a real value.
    fn from_real(real: Self::Real) -> Self;

    /// The projection, failing with [`ArithmeticError::NonRealValue`].
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonRealValue`] if the value has an
    /// imaginary component.
    fn try_real(&self) -> Result<Self::Real, ArithmeticError> {
        self.to_real()
            .ok_or_else(|| ArithmeticError::NonRealValue(self.to_string()))
    }

    /// Returns true for a real, strictly negative value.
    fn is_negative_real(&self) -> bool {
        self.to_real().is_some_and(|r| r.signum() < 0)
    }
}
