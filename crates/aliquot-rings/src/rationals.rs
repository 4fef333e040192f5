//! The field of rational numbers.

use crate::traits::{Field, OrderedRing, RealProjection, Ring};
use aliquot_integers::{ArithmeticError, Rational};

impl Ring for Rational {
    fn zero() -> Self {
        <Self as num_traits::Zero>::zero()
    }

    fn one() -> Self {
        <Self as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }

    fn from_i64(n: i64) -> Self {
        Rational::from(n)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self * &Rational::from(n)
    }
}

impl Field for Rational {
    fn inv(&self) -> Result<Self, ArithmeticError> {
        self.recip()
    }

    fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        Rational::checked_div(self, other)
    }
}

impl OrderedRing for Rational {
    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn signum(&self) -> i8 {
        Rational::signum(self)
    }
}

impl RealProjection for Rational {
    type Real = Rational;

    fn is_real(&self) -> bool {
        true
    }

    fn to_real(&self) -> Option<Self::Real> {
        Some(self.clone())
    }

    fn from_real(real: Self::Real) -> Self {
        real
    }
}
